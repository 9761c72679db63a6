use serde::{Deserialize, Serialize};

/// Speaker attribution for a transcript span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Patient,
    Clinician,
    Unknown,
}

/// One segmented span of the redacted transcript. Read-only once created;
/// offsets index the redacted text exactly, so spans can be anchored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSpan {
    pub start: usize,
    pub end: usize,
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptSpan {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split the redacted transcript into sentence/utterance spans.
///
/// Lines prefixed `Patient:` / `Doctor:` / `Clinician:` attribute a speaker;
/// unprefixed lines stay `Unknown`. Sentences split on `.`, `?`, `!` and
/// line breaks. Span offsets always index the text passed in, with speaker
/// prefixes and surrounding whitespace excluded from the span.
pub fn segment(redacted: &str) -> Vec<TranscriptSpan> {
    let mut spans = Vec::new();
    let mut line_start = 0;

    for line in redacted.split_inclusive('\n') {
        let content = line.trim_end_matches('\n');
        let (speaker, offset) = speaker_prefix(content);
        segment_line(redacted, line_start + offset, content.len() - offset, speaker, &mut spans);
        line_start += line.len();
    }
    spans
}

/// Complaint candidates: non-empty spans not attributed to the clinician
pub fn complaint_candidates(spans: &[TranscriptSpan]) -> Vec<&TranscriptSpan> {
    spans
        .iter()
        .filter(|s| s.speaker != Speaker::Clinician && !s.is_empty())
        .collect()
}

fn speaker_prefix(line: &str) -> (Speaker, usize) {
    for (prefix, speaker) in [
        ("Patient:", Speaker::Patient),
        ("Doctor:", Speaker::Clinician),
        ("Clinician:", Speaker::Clinician),
    ] {
        if line.starts_with(prefix) {
            return (speaker, prefix.len());
        }
    }
    (Speaker::Unknown, 0)
}

fn segment_line(
    text: &str,
    start: usize,
    len: usize,
    speaker: Speaker,
    spans: &mut Vec<TranscriptSpan>,
) {
    let content = &text[start..start + len];
    let mut sentence_start = 0;

    for (i, ch) in content.char_indices() {
        if matches!(ch, '.' | '?' | '!') {
            push_trimmed(text, start + sentence_start, start + i, speaker, spans);
            sentence_start = i + ch.len_utf8();
        }
    }
    push_trimmed(text, start + sentence_start, start + len, speaker, spans);
}

fn push_trimmed(
    text: &str,
    mut start: usize,
    mut end: usize,
    speaker: Speaker,
    spans: &mut Vec<TranscriptSpan>,
) {
    let slice = &text[start..end];
    start += slice.len() - slice.trim_start().len();
    end -= slice.len() - slice.trim_end().len();
    if start >= end {
        return;
    }
    spans.push(TranscriptSpan {
        start,
        end,
        speaker,
        text: text[start..end].to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_sentences_with_exact_offsets() {
        let text = "I have a cough. It is worse at night.";
        let spans = segment(text);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "I have a cough");
        assert_eq!(spans[1].text, "It is worse at night");
        for span in &spans {
            assert_eq!(span.text, &text[span.start..span.end]);
        }
    }

    #[test]
    fn test_speaker_attribution() {
        let text = "Doctor: What brings you in?\nPatient: I have had diarrhea since yesterday.";
        let spans = segment(text);
        assert_eq!(spans[0].speaker, Speaker::Clinician);
        assert_eq!(spans[1].speaker, Speaker::Patient);
        assert_eq!(spans[1].text, "I have had diarrhea since yesterday");

        let candidates = complaint_candidates(&spans);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].speaker, Speaker::Patient);
    }

    #[test]
    fn test_unprefixed_lines_remain_candidates() {
        let spans = segment("I feel dizzy in the mornings.");
        let candidates = complaint_candidates(&spans);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].speaker, Speaker::Unknown);
    }
}
