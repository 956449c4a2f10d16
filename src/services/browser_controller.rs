use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use super::browser::{BrowserState, RenderState};
use crate::domain::Browsable;
use crate::repository::DatasetSource;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Browser controller has stopped")]
pub struct ControllerClosed;

pub enum BrowserCommand<T> {
    Loaded(Vec<T>),
    Failed(String),
    SetQuery(String),
    SetFacet(String),
    NearBottom,
    Snapshot(oneshot::Sender<RenderState<T>>),
}

impl<T> std::fmt::Debug for BrowserCommand<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserCommand::Loaded(items) => write!(f, "Loaded({} items)", items.len()),
            BrowserCommand::Failed(message) => write!(f, "Failed({message:?})"),
            BrowserCommand::SetQuery(query) => write!(f, "SetQuery({query:?})"),
            BrowserCommand::SetFacet(facet) => write!(f, "SetFacet({facet:?})"),
            BrowserCommand::NearBottom => f.write_str("NearBottom"),
            BrowserCommand::Snapshot(_) => f.write_str("Snapshot"),
        }
    }
}

/// Owns a [`BrowserState`] on a dedicated task. Every mutation goes through
/// one FIFO queue, so commands are applied strictly in the order they were
/// sent, and each applied command republishes the render state.
pub struct BrowserController<T> {
    commands: mpsc::UnboundedSender<BrowserCommand<T>>,
    renders: watch::Receiver<RenderState<T>>,
    actor: JoinHandle<()>,
    fetch: Option<JoinHandle<()>>,
}

impl<T> BrowserController<T>
where
    T: Browsable + Clone + Send + Sync + 'static,
{
    pub fn spawn(state: BrowserState<T>) -> Self {
        let (commands, inbox) = mpsc::unbounded_channel();
        let (publisher, renders) = watch::channel(state.render());
        let actor = tokio::spawn(run_actor(state, inbox, publisher));
        Self {
            commands,
            renders,
            actor,
            fetch: None,
        }
    }

    /// Spawn and start the session's single fetch from `source`.
    pub fn spawn_with_source(state: BrowserState<T>, source: Arc<dyn DatasetSource<T>>) -> Self {
        let mut controller = Self::spawn(state);
        let commands = controller.commands.clone();
        controller.fetch = Some(tokio::spawn(async move {
            let command = match source.fetch().await {
                Ok(items) => BrowserCommand::Loaded(items),
                Err(err) => BrowserCommand::Failed(err.to_string()),
            };
            if commands.send(command).is_err() {
                tracing::debug!("controller stopped before fetch completed");
            }
        }));
        controller
    }

    pub fn send(&self, command: BrowserCommand<T>) -> Result<(), ControllerClosed> {
        self.commands.send(command).map_err(|_| ControllerClosed)
    }

    pub fn set_query(&self, query: impl Into<String>) -> Result<(), ControllerClosed> {
        self.send(BrowserCommand::SetQuery(query.into()))
    }

    pub fn set_facet(&self, facet: impl Into<String>) -> Result<(), ControllerClosed> {
        self.send(BrowserCommand::SetFacet(facet.into()))
    }

    pub fn near_bottom(&self) -> Result<(), ControllerClosed> {
        self.send(BrowserCommand::NearBottom)
    }

    /// Latest published render state.
    pub fn current(&self) -> RenderState<T> {
        self.renders.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RenderState<T>> {
        self.renders.clone()
    }

    /// Render state after every command queued before this call.
    pub async fn snapshot(&self) -> Result<RenderState<T>, ControllerClosed> {
        let (reply, response) = oneshot::channel();
        self.send(BrowserCommand::Snapshot(reply))?;
        response.await.map_err(|_| ControllerClosed)
    }

    /// Wait until the dataset has settled (ready or failed).
    pub async fn settled(&self) -> Result<RenderState<T>, ControllerClosed> {
        let mut renders = self.renders.clone();
        let state = renders
            .wait_for(|state| !matches!(state, RenderState::Loading))
            .await
            .map_err(|_| ControllerClosed)?;
        Ok(state.clone())
    }
}

impl<T> Drop for BrowserController<T> {
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
        self.actor.abort();
    }
}

async fn run_actor<T>(
    mut state: BrowserState<T>,
    mut inbox: mpsc::UnboundedReceiver<BrowserCommand<T>>,
    publisher: watch::Sender<RenderState<T>>,
) where
    T: Browsable + Clone + Send + Sync + 'static,
{
    while let Some(command) = inbox.recv().await {
        tracing::trace!(?command, "applying browser command");
        let changed = match command {
            BrowserCommand::Loaded(items) => state.load_items(items),
            BrowserCommand::Failed(message) => state.fail(message),
            BrowserCommand::SetQuery(query) => state.set_query(query),
            BrowserCommand::SetFacet(facet) => state.set_facet(facet),
            BrowserCommand::NearBottom => state.grow(),
            BrowserCommand::Snapshot(reply) => {
                let _ = reply.send(state.render());
                false
            }
        };
        if changed {
            publisher.send_replace(state.render());
        }
    }
    tracing::debug!("browser controller inbox closed");
}
