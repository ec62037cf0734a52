//! Canvas-compatible QTI 1.2 package: an assessment document plus an IMS
//! content-package manifest, zipped together.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::{
    errors::AppResult,
    models::domain::{Question, Quiz},
    services::prompt_builder::truncate_chars,
};

pub const ASSESSMENT_FILE: &str = "assessment_qti.xml";
pub const MANIFEST_FILE: &str = "imsmanifest.xml";

const ITEM_TITLE_CHAR_LIMIT: usize = 96;

fn build_item(index: usize, question: &Question) -> String {
    let labels = question
        .choices
        .iter()
        .map(|c| {
            format!(
                "            <response_label ident=\"{}\"><material><mattext texttype=\"text/plain\">{}</mattext></material></response_label>",
                c.id,
                escape(c.text.as_str())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let feedback = escape(question.explanation.as_deref().unwrap_or(""));

    format!(
        r#"      <item ident="ITEM-{n}" title="{title}">
        <presentation>
          <material><mattext texttype="text/plain">{prompt}</mattext></material>
          <response_lid ident="response1" rcardinality="Single">
            <render_choice>
{labels}
            </render_choice>
          </response_lid>
        </presentation>
        <resprocessing>
          <outcomes><decvar maxvalue="1" minvalue="0" varname="SCORE" vartype="Decimal"/></outcomes>
          <respcondition continue="No">
            <conditionvar><varequal respident="response1">{correct}</varequal></conditionvar>
            <setvar action="Set" varname="SCORE">1</setvar>
            <displayfeedback feedbacktype="Response" linkrefid="correct"/>
          </respcondition>
        </resprocessing>
        <itemfeedback ident="correct"><material><mattext texttype="text/plain">{feedback}</mattext></material></itemfeedback>
      </item>"#,
        n = index + 1,
        title = escape(truncate_chars(&question.prompt, ITEM_TITLE_CHAR_LIMIT)),
        prompt = escape(question.prompt.as_str()),
        labels = labels,
        correct = question.correct_choice_id,
        feedback = feedback,
    )
}

pub fn build_assessment_xml(quiz: &Quiz) -> String {
    let items = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| build_item(i, q))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<questestinterop>
  <assessment ident="A1" title="{title}">
    <section ident="root_section">
{items}
    </section>
  </assessment>
</questestinterop>"#,
        title = escape(quiz.title.as_str()),
        items = items,
    )
}

pub fn build_manifest_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest identifier="MANIFEST-QUIZZR" xmlns="http://www.imsglobal.org/xsd/imscp_v1p1" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://www.imsglobal.org/xsd/imscp_v1p1 imscp_rootv1p1p2.xsd">
  <organizations />
  <resources>
    <resource identifier="RES1" type="imsqti_test_xmlv1p2" href="{file}">
      <file href="{file}" />
    </resource>
  </resources>
</manifest>"#,
        file = ASSESSMENT_FILE,
    )
}

/// Zip archive bytes holding the assessment and the manifest.
pub fn quiz_to_qti_zip(quiz: &Quiz) -> AppResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(ASSESSMENT_FILE, options)?;
    writer.write_all(build_assessment_xml(quiz).as_bytes())?;

    writer.start_file(MANIFEST_FILE, options)?;
    writer.write_all(build_manifest_xml().as_bytes())?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
