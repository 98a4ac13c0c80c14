mod view;

pub use view::TeacherPage;
