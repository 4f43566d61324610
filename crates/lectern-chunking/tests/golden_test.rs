//! Golden dataset tests for the chunker.

use lectern_chunking::Chunker;
use lectern_core::{ChunkType, SourceId};
use test_fixtures::load_fixture_value;

#[test]
fn golden_lesson_basic() {
    let fixture = load_fixture_value("golden/chunking/lesson_basic.json");
    let text = fixture["input"]["text"].as_str().unwrap();
    let expected = &fixture["expected_output"];

    let chunker = Chunker::default();
    let chunks = chunker.chunk(&SourceId::new("lesson"), text);

    assert_eq!(
        chunks.len(),
        expected["chunks_total"].as_u64().unwrap() as usize
    );
    let concepts = chunks
        .iter()
        .filter(|c| c.kind == ChunkType::Concept)
        .count();
    assert_eq!(
        concepts,
        expected["concept_chunks"].as_u64().unwrap() as usize
    );

    if expected["has_summary"].as_bool().unwrap() {
        let last = chunks.last().unwrap();
        assert_eq!(last.kind, ChunkType::Summary);
    }

    let starts: Vec<&str> = expected["chunk_starts"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    for (chunk, start) in chunks.iter().zip(&starts) {
        assert!(
            chunk.text.starts_with(start),
            "chunk {} should start with {:?}, got {:?}",
            chunk.order,
            start,
            &chunk.text[..chunk.text.len().min(40)]
        );
    }

    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.order, i, "orders must be dense from zero");
    }
}

#[test]
fn golden_fragments_only() {
    let fixture = load_fixture_value("golden/chunking/fragments_only.json");
    let text = fixture["input"]["text"].as_str().unwrap();

    let chunker = Chunker::default();
    assert!(chunker.chunk(&SourceId::new("fragments"), text).is_empty());
    assert!(chunker.chunk(&SourceId::new("empty"), "").is_empty());
}
