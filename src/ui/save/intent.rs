use crate::ui::mvi::Intent;

#[derive(Clone, Debug)]
pub enum SaveIntent {
    /// An export worker was started.
    Begin,
    /// The worker wrote the PNG.
    Finished,
    /// The worker could not produce or write the image.
    Failed { message: String },
}

impl Intent for SaveIntent {}
