use crate::core::content::Video;

/// The video loaded into the embedded player, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    current: Option<Video>,
}

impl PlayerState {
    /// Replaces whatever is playing.
    pub fn play(&mut self, video: Video) {
        self.current = Some(video);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Video> {
        self.current.as_ref()
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.current.as_ref().is_some_and(|video| video.id == id)
    }
}
