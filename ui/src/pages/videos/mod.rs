mod state;
mod view;

pub use state::PlayerState;
pub use view::VideosPage;
