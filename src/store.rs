//! Persistence: the cleaned corpus between stages and the datasets at the end.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use feature_types::Row;
use serde::Serialize;
use tracing::info;

use crate::error::{PipelineError, Result};

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Write the corpus as UTF-8, byte for byte.
pub fn write_corpus(path: &Path, corpus: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, corpus).map_err(|e| PipelineError::io(path, e))?;
    info!("wrote corpus {} ({} bytes)", path.display(), corpus.len());
    Ok(())
}

pub fn read_corpus(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PipelineError::missing_or_io(path, e))
}

/// Write `rows` as CSV behind the row type's header. The header is written
/// even when there are no rows.
pub fn write_table<T: Row>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| PipelineError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(BufWriter::new(file));

    writer.write_record(T::HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(|e| PipelineError::io(path, e))?;

    info!("wrote {} ({} rows)", path.display(), rows.len());
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, &json).map_err(|e| PipelineError::io(path, e))?;
    info!("wrote {} ({} bytes)", path.display(), json.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feature_types::{EntityRow, SentenceRow, TokenRow};

    // ── corpus ───────────────────────────────────────────────────────

    #[test]
    fn test_corpus_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/transcript_clean.txt");
        let corpus = "Año 2019: • Becas “Benito Juárez”, niñas y niños.\r sin cambio ";
        write_corpus(&path, corpus).unwrap();
        assert_eq!(fs::read(&path).unwrap(), corpus.as_bytes());
        assert_eq!(read_corpus(&path).unwrap(), corpus);
    }

    #[test]
    fn test_read_missing_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript_clean.txt");
        assert!(matches!(
            read_corpus(&path),
            Err(PipelineError::ResourceNotFound(p)) if p == path
        ));
    }

    // ── tables ───────────────────────────────────────────────────────

    #[test]
    fn test_header_written_for_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/entities.csv");
        write_table::<EntityRow>(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "text,text_lower,label\r\n");
    }

    #[test]
    fn test_token_table_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.csv");
        let rows = [
            TokenRow {
                text: "Hola".into(),
                text_lower: "hola".into(),
                lemma: "hola".into(),
                lemma_lower: "hola".into(),
                part_of_speech: "INTJ".into(),
                is_alphabet: true,
                is_stopword: false,
            },
            TokenRow {
                text: ",".into(),
                text_lower: ",".into(),
                lemma: ",".into(),
                lemma_lower: ",".into(),
                part_of_speech: "PUNCT".into(),
                is_alphabet: false,
                is_stopword: false,
            },
        ];
        write_table(&path, &rows).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "text,text_lower,lemma,lemma_lower,part_of_speech,is_alphabet,is_stopword\r\n\
             Hola,hola,hola,hola,INTJ,True,False\r\n\
             \",\",\",\",\",\",\",\",PUNCT,False,False\r\n"
        );
    }

    #[test]
    fn test_token_table_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.csv");
        let row = TokenRow {
            text: "Becas".into(),
            text_lower: "becas".into(),
            lemma: "beca".into(),
            lemma_lower: "beca".into(),
            part_of_speech: "NOUN".into(),
            is_alphabet: true,
            is_stopword: false,
        };
        write_table(&path, std::slice::from_ref(&row)).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let back: Vec<TokenRow> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(back, [row]);
    }

    #[test]
    fn test_sentence_table_quotes_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sentences.csv");
        let rows = [SentenceRow {
            text: "Más becas, más escuelas.".into(),
            score: -2,
        }];
        write_table(&path, &rows).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "text,score\r\n\"Más becas, más escuelas.\",-2\r\n"
        );
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats/run_stats.json");
        write_json(&path, &serde_json::json!({ "tokens": 3 })).unwrap();
        let back: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["tokens"], 3);
    }
}
