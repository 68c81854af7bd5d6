#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    CallBackend,
    Shutdown,
}
