mod state;
mod view;

pub use state::LikedQuotes;
pub use view::QuotesPage;
