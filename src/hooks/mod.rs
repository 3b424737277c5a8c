pub mod fetch_state;
pub mod use_inflation;
pub mod use_last_price;
pub mod use_prediction;
pub mod use_price_history;
pub mod use_provinces;
pub mod use_saved_series;
