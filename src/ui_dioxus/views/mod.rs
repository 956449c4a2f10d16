pub mod countries_view;


pub use countries_view::CountriesView;
