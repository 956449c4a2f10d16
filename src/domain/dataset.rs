/// Outcome of the one-per-session dataset fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetResult<T> {
    Pending,
    Failed(String),
    Ready(Vec<T>),
}

impl<T> Default for DatasetResult<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> DatasetResult<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// The loaded items, or an empty slice while pending or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<Vec<T>, E>> for DatasetResult<T> {
    fn from(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::Ready(items),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        let result: DatasetResult<u32> = DatasetResult::default();
        assert!(result.is_pending());
        assert!(result.items().is_empty());
        assert!(!result.is_settled());
    }

    #[test]
    fn test_failure_keeps_message_verbatim() {
        let result: DatasetResult<u32> = Err::<Vec<u32>, _>("network error").into();
        assert_eq!(result, DatasetResult::Failed("network error".to_string()));
        assert!(result.is_settled());
        assert!(result.items().is_empty());
    }

    #[test]
    fn test_ready_exposes_items() {
        let result: DatasetResult<u32> = Ok::<_, String>(vec![1, 2, 3]).into();
        assert_eq!(result.items(), &[1, 2, 3]);
    }
}
