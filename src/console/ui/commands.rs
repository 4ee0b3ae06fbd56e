use crate::console::domain::models::WorkerRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    /// Send a request to the service off the UI thread
    Dispatch(WorkerRequest),
}
