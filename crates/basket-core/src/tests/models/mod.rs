mod local_session;
