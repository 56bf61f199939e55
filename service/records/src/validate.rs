use chrono::NaiveDate;
use domain_records::{exception::FieldViolation, model::vo::FileUpload};

pub(crate) const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;
pub(crate) const MAX_TEXT_CHARS: usize = 255;

/// MIME types accepted for upload: images, pdf and the office document
/// family.
pub(crate) const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

fn violation(field: &'static str, message: impl Into<String>) -> FieldViolation {
    FieldViolation {
        field,
        message: message.into(),
    }
}

/// The filename names the blob under the storage root, so it must be a
/// plain name: no separators, no `.`/`..` components.
pub(crate) fn check_filename(filename: &str, out: &mut Vec<FieldViolation>) {
    if filename.trim().is_empty() {
        out.push(violation("filename", "is required"));
        return;
    }
    if filename.chars().count() > MAX_TEXT_CHARS {
        out.push(violation(
            "filename",
            format!("is longer than {MAX_TEXT_CHARS} characters"),
        ));
    }
    if filename.contains('/') || filename.contains('\\') || filename == "." || filename == ".." {
        out.push(violation("filename", "must be a plain file name"));
    }
}

pub(crate) fn check_upload(file: &FileUpload, out: &mut Vec<FieldViolation>) {
    check_filename(&file.filename, out);
    if file.content.is_empty() {
        out.push(violation("file", "payload is empty"));
    } else if file.content.len() > MAX_FILE_BYTES {
        out.push(violation(
            "file",
            format!("payload exceeds {MAX_FILE_BYTES} bytes"),
        ));
    }
    if !ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        out.push(violation(
            "file",
            format!("content type {} is not allowed", file.content_type),
        ));
    }
}

pub(crate) fn check_text(field: &'static str, value: &str, out: &mut Vec<FieldViolation>) {
    if value.trim().is_empty() {
        out.push(violation(field, "is required"));
    } else if value.chars().count() > MAX_TEXT_CHARS {
        out.push(violation(
            field,
            format!("is longer than {MAX_TEXT_CHARS} characters"),
        ));
    }
}

pub(crate) fn check_date(date: &str, out: &mut Vec<FieldViolation>) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            out.push(violation("date", "is not a calendar date (want YYYY-MM-DD)"));
            None
        }
    }
}
