//! Chart-summary page: builds a one-page A4 PDF (centered title, scaled
//! chart image, fixed caption) and appends it to the converted document by
//! deep-copying page objects between lopdf documents.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

const A4_WIDTH: f32 = 595.28;
const A4_HEIGHT: f32 = 841.89;

const IMAGE_LEFT: f32 = 40.0;
const IMAGE_MAX_WIDTH: f32 = 520.0;
const CAPTION: &str = "Note: The chart represents financial projections and key ratios.";

/// Loads `base_pdf`, appends the summary page (titled after `title_stem`,
/// with `chart_png` scaled to fit when present) and saves the merged
/// document to `out_pdf`.
pub fn compose_summary_pdf(
    base_pdf: &Path,
    title_stem: &str,
    chart_png: Option<&Path>,
    out_pdf: &Path,
) -> Result<()> {
    let mut target = Document::load(base_pdf)
        .with_context(|| format!("failed to load {}", base_pdf.display()))?;

    let summary = build_summary_page(&format!("Financial Summary - {title_stem}"), chart_png)?;
    append_pages(&mut target, &summary)?;

    target
        .save(out_pdf)
        .with_context(|| format!("failed to save {}", out_pdf.display()))?;
    Ok(())
}

/// Builds a standalone one-page document. Exposed for the merge tests.
pub fn build_summary_page(title_line: &str, chart_png: Option<&Path>) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut resources = dictionary! {
        "Font" => dictionary! {
            "F1" => Object::Reference(bold_id),
            "F2" => Object::Reference(regular_id),
        },
    };

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 14.into()]),
        Operation::new(
            "Td",
            vec![
                centered_x(title_line, 14.0).into(),
                (A4_HEIGHT - 40.0).into(),
            ],
        ),
        Operation::new(
            "Tj",
            vec![Object::String(
                title_line.as_bytes().to_vec(),
                StringFormat::Literal,
            )],
        ),
        Operation::new("ET", vec![]),
    ];

    if let Some(chart) = chart_png {
        let image_id = add_chart_xobject(&mut doc, chart)?;
        let mut xobjects = Dictionary::new();
        xobjects.set("Im1", Object::Reference(image_id));
        resources.set("XObject", xobjects);

        let (px_w, px_h) = image::image_dimensions(chart)
            .with_context(|| format!("failed to probe {}", chart.display()))?;
        let draw_w = IMAGE_MAX_WIDTH;
        let draw_h = draw_w * px_h as f32 / px_w.max(1) as f32;
        let bottom_y = A4_HEIGHT - 80.0 - draw_h;

        operations.extend([
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    draw_w.into(),
                    0.into(),
                    0.into(),
                    draw_h.into(),
                    IMAGE_LEFT.into(),
                    bottom_y.into(),
                ],
            ),
            Operation::new("Do", vec!["Im1".into()]),
            Operation::new("Q", vec![]),
        ]);
    }

    operations.extend([
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F2".into(), 10.into()]),
        Operation::new("Td", vec![40.into(), 60.into()]),
        Operation::new(
            "Tj",
            vec![Object::String(
                CAPTION.as_bytes().to_vec(),
                StringFormat::Literal,
            )],
        ),
        Operation::new("ET", vec![]),
    ]);

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().context("failed to encode page content")?,
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![0.into(), 0.into(), A4_WIDTH.into(), A4_HEIGHT.into()],
        "Contents" => Object::Reference(content_id),
        "Resources" => resources,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    Ok(doc)
}

/// Decodes the chart PNG and embeds it as an uncompressed RGB image XObject.
fn add_chart_xobject(doc: &mut Document, chart: &Path) -> Result<ObjectId> {
    let rgb = image::open(chart)
        .with_context(|| format!("failed to decode {}", chart.display()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();

    let stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb.into_raw(),
    );
    Ok(doc.add_object(stream))
}

// Coarse Helvetica advance estimate; exact centering is not required.
fn centered_x(text: &str, font_size: f32) -> f32 {
    let approx_width = text.len() as f32 * font_size * 0.5;
    ((A4_WIDTH - approx_width) / 2.0).max(20.0)
}

/// Appends every page of `source` to `target`, deep-copying each page's
/// object graph so object ids never collide.
pub fn append_pages(target: &mut Document, source: &Document) -> Result<()> {
    let source_pages = source.get_pages();
    if source_pages.is_empty() {
        return Ok(());
    }

    let new_page_ids = {
        let mut copier = ObjectCopier {
            source,
            target,
            id_map: HashMap::new(),
        };
        source_pages
            .values()
            .map(|id| copier.copy_object(*id))
            .collect::<Result<Vec<_>, _>>()
            .context("failed to copy page objects")?
    };

    let pages_id = target
        .catalog()?
        .get(b"Pages")?
        .as_reference()
        .context("catalog Pages entry is not a reference")?;

    for id in &new_page_ids {
        if let Ok(dict) = target.get_object_mut(*id).and_then(Object::as_dict_mut) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let pages_dict = target
        .get_object_mut(pages_id)
        .and_then(Object::as_dict_mut)
        .context("Pages node is not a dictionary")?;
    let count = pages_dict
        .get(b"Count")
        .and_then(Object::as_i64)
        .unwrap_or(0);
    pages_dict
        .get_mut(b"Kids")
        .and_then(Object::as_array_mut)
        .context("Pages node has no Kids array")?
        .extend(new_page_ids.iter().map(|id| Object::Reference(*id)));
    pages_dict.set("Count", count + new_page_ids.len() as i64);

    Ok(())
}

/// Copies objects between documents, remapping references. A placeholder
/// object is inserted before recursing so cyclic references (Page ->
/// Parent -> Kids -> Page) terminate.
struct ObjectCopier<'a> {
    source: &'a Document,
    target: &'a mut Document,
    id_map: HashMap<ObjectId, ObjectId>,
}

impl ObjectCopier<'_> {
    fn copy_object(&mut self, source_id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(mapped) = self.id_map.get(&source_id) {
            return Ok(*mapped);
        }

        let new_id = self.target.add_object(Object::Null);
        self.id_map.insert(source_id, new_id);

        let remapped = self.remap(self.source.get_object(source_id)?.clone())?;
        if let Some(slot) = self.target.objects.get_mut(&new_id) {
            *slot = remapped;
        }
        Ok(new_id)
    }

    fn remap(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        match obj {
            Object::Reference(id) => Ok(Object::Reference(self.copy_object(id)?)),
            Object::Array(items) => Ok(Object::Array(
                items
                    .into_iter()
                    .map(|o| self.remap(o))
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.remap(value.clone())?;
                }
                Ok(Object::Dictionary(dict))
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.remap(value.clone())?;
                }
                Ok(Object::Stream(stream))
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_page_has_one_page() {
        let doc = build_summary_page("Financial Summary - test", None).expect("build");
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_append_pages_increments_count() {
        let mut base = build_summary_page("page one", None).expect("build base");
        let extra = build_summary_page("page two", None).expect("build extra");
        append_pages(&mut base, &extra).expect("merge");
        assert_eq!(base.get_pages().len(), 2);
    }

    #[test]
    fn test_compose_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let base_path = dir.path().join("base.pdf");
        let out_path = dir.path().join("out.pdf");

        let mut base = build_summary_page("base document", None).expect("build");
        base.save(&base_path).expect("save base");

        compose_summary_pdf(&base_path, "abc123_dpr", None, &out_path).expect("compose");

        let merged = Document::load(&out_path).expect("load merged");
        assert_eq!(merged.get_pages().len(), 2);
    }
}
