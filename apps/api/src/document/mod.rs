pub mod chart;
pub mod docx;
pub mod excel;
pub mod markup;
