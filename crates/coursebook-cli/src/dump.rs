//! Non-interactive output of a single lesson.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use coursebook_engine::{BlockNode, Catalog, InlineSpan, Lesson, parse_inline_for_block};
use serde::Serialize;

use crate::render::{DEFAULT_ACCENT, lesson_lines, plain_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// Rendered lesson without styling
    Text,
    /// Block tree with per-run inline spans
    Json,
}

#[derive(Serialize)]
struct LessonDump<'a> {
    course: &'a str,
    id: u32,
    title: &'a str,
    desc: &'a str,
    blocks: Vec<BlockDump<'a>>,
}

#[derive(Serialize)]
struct BlockDump<'a> {
    #[serde(flatten)]
    node: &'a BlockNode,
    inline: Vec<Vec<InlineSpan>>,
}

pub fn dump_lesson(
    catalog: &Catalog,
    course_id: &str,
    lesson_id: u32,
    format: DumpFormat,
    out: &mut impl Write,
) -> Result<()> {
    let course = catalog
        .course(course_id)
        .with_context(|| format!("No course with id '{course_id}'"))?;
    let lesson = course
        .lesson_by_id(lesson_id)
        .with_context(|| format!("Course '{course_id}' has no lesson {lesson_id}"))?;

    match format {
        DumpFormat::Text => write_text(lesson, out),
        DumpFormat::Json => write_json(course_id, lesson, out),
    }
}

fn write_text(lesson: &Lesson, out: &mut impl Write) -> Result<()> {
    let doc = lesson.document();
    out.write_all(plain_text(&lesson_lines(lesson, &doc, DEFAULT_ACCENT)).as_bytes())?;
    Ok(())
}

fn write_json(course: &str, lesson: &Lesson, out: &mut impl Write) -> Result<()> {
    let doc = lesson.document();
    let dump = LessonDump {
        course,
        id: lesson.id,
        title: &lesson.title,
        desc: &lesson.desc,
        blocks: doc
            .blocks
            .iter()
            .map(|node| BlockDump {
                node,
                inline: parse_inline_for_block(&node.block),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &dump)?;
    writeln!(out)?;
    Ok(())
}
