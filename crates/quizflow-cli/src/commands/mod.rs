pub mod show;
pub mod submit;
pub mod terms;
pub mod whoami;
