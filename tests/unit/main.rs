mod test_config;
mod test_error;
mod test_manager;
mod test_responses;
mod test_transport;
