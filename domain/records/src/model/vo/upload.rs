/// One client upload: the bytes plus what the client claims about them.
///
/// `filename` and `content_type` are untrusted input; both go through the
/// field validators before either store is touched.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}
