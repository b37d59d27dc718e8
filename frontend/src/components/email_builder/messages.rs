use builder_common::{Container, DropLocation, PendingImage};

pub enum Msg {
    DragStart(DropLocation),
    DragOver(DropLocation),
    Drop(DropLocation),
    /// Dropped on a container's empty area, after its last item.
    DropAtEnd(Container),
    DragEnd,
    UpdateText { id: String, text: String },
    ImageFileSelected { index: usize, file: web_sys::File },
    ImageDecoded { pending: PendingImage, data_url: String },
    ImageDecodeFailed { pending: PendingImage, reason: String },
    UpdateImageUrl { index: usize, url: String },
    /// URL typed into the image dialog, addressed by item id.
    ReplaceImageUrl { id: String, url: String },
    OpenImageDialog(String),
    CloseImageDialog,
    RemoveImage(String),
}
