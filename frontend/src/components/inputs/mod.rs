mod field_input;
mod image_input;

pub use field_input::{FieldInput, FieldInputProps};
pub use image_input::{ImageInput, ImageInputProps};

pub(crate) const LABEL_STYLE: &str =
    "display:block;margin-bottom:0.5rem;font-size:0.875rem;font-weight:500;color:#fff;";
pub(crate) const INPUT_STYLE: &str = "display:block;width:100%;box-sizing:border-box;padding:0.5rem;margin-bottom:1rem;border:1px solid #d1d5db;border-radius:0.5rem;background:#f9fafb;color:#111827;";
