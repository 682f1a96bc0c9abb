pub mod local_session;
pub mod local_user;
