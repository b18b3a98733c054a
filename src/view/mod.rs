pub mod composer;
pub mod render;
pub mod state;

pub use composer::{compose, filter_edge_only, select_matches, visible_picks, MatchCard, View};
pub use render::{render, render_json, render_load_error};
pub use state::{Competition, Tab, ViewState};
