// Prompt constants for the assessment pipeline.

pub const ASSESSMENT_SYSTEM: &str = "You are a senior interviewer and hiring-bar raiser. \
    You evaluate mock interview transcripts and score candidates on fixed dimensions. \
    You are strict but fair: average answers score 50-65, strong answers 70-85, \
    exceptional answers above 85. You MUST respond with a single valid JSON object only.";

/// Placeholders: {round_type}, {round_guidance}, {role_title}, {focus_skills},
/// {dimensions}, {evidence_instruction}, {transcript}
pub const ASSESSMENT_PROMPT_TEMPLATE: &str = r#"Assess this {round_type} interview for the role of {role_title}.

Round guidance: {round_guidance}

Skills this round should probe (most relevant first): {focus_skills}

Score EACH of these dimensions from 0 to 100:
{dimensions}

{evidence_instruction}

Return JSON with exactly this shape:
{
  "dimensions": [
    {"dimension": "<dimension key>", "score": <0-100>, "evidence": "<quote or paraphrase>", "improvement": "<one concrete tip>"}
  ],
  "summary": "<two or three sentences>",
  "strengths": ["<strength>"],
  "gaps": ["<gap>"]
}

Transcript:
"""
{transcript}
""""#;

pub const BEHAVIORAL_GUIDANCE: &str = "Look for STAR-structured stories, personal ownership, \
    measurable outcomes and reflection on what the candidate learned.";

pub const TECHNICAL_GUIDANCE: &str = "Look for correct fundamentals, design trade-offs, \
    awareness of failure modes and the ability to go one level deeper when probed.";

pub const CODING_GUIDANCE: &str = "Look for clarifying questions, a working approach, \
    complexity analysis, edge cases and testing before declaring done.";

pub const CASE_STUDY_GUIDANCE: &str = "Look for a clear framework, hypothesis-driven analysis, \
    sensible estimates, use of data and a crisp recommendation.";
