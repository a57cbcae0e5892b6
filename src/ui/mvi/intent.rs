/// Something that happened: a key press, a worker result or a fired timer.
pub trait Intent: Send + 'static {}
