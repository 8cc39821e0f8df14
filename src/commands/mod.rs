pub mod check;
pub mod make_project;
