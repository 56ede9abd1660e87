//! Composite exam papers.
//!
//! - [`template`]: exam section template and its file format
//! - [`assembler`]: sequential section-by-section paper assembly

pub mod assembler;
pub mod template;

pub use assembler::{ExamAssembler, ExamError, ExamSection, ExamSettings};
pub use template::{load_exam_template, ExamTemplate, SectionSpec, TemplateError};
