pub const BEGIN_JSON_MARKER: &str = "###BEGIN_JSON###";
pub const END_JSON_MARKER: &str = "###END_JSON###";
pub const BEGIN_PREVIOUS_MARKER: &str = "BEGIN_PREVIOUS";
pub const END_PREVIOUS_MARKER: &str = "END_PREVIOUS";

/// Maximum characters of user source text embedded in any prompt.
pub const SOURCE_CHAR_LIMIT: usize = 18_000;

/// Maximum characters of the previous reply re-submitted by the repair prompt.
pub const PREVIOUS_REPLY_CHAR_LIMIT: usize = 6_000;

/// Stop sequences sent with every completion request to trim chatter.
pub const STOP_SEQUENCES: [&str; 4] = ["###END_JSON###", "```", "END_PREVIOUS", "---\n\n"];

pub const QUIZ_SYSTEM_PROMPT: &str = "You are QUIZZR, a strict JSON generator for multiple-choice quizzes.
Return ONLY JSON between markers exactly:
###BEGIN_JSON###
{ ...valid JSON... }
###END_JSON###
Never include markdown, commentary, or extra keys.

Types:
interface Choice { id: 'A'|'B'|'C'|'D'; text: string; }
interface Question { id: string; type: 'mcq'; prompt: string; choices: Choice[]; correctChoiceId: 'A'|'B'|'C'|'D'; explanation?: string; }
interface Quiz { title: string; description: string; metadata: { topic: string; difficulty: 'easy'|'medium'|'hard'; numQuestions: number; }; questions: Question[]; }";

pub const QUIZ_RULES: &str = "Rules:
- ONLY single-correct MCQs (type=\"mcq\").
- Exactly 4 choices with ids \"A\",\"B\",\"C\",\"D\".
- Clear prompts; classroom-appropriate.
- Include a short explanation for each.
- Output MUST be valid JSON matching Quiz, wrapped in the specified markers.";

pub const JSON_SOURCE_INSTRUCTION: &str =
    "Generate questions ONLY from the following source text. Do NOT invent facts not present in it.";

pub const JSON_NO_SOURCE_INSTRUCTION: &str =
    "If you lack a source, use reliable, widely accepted fundamentals for the topic.";

pub const REPAIR_INSTRUCTION: &str = "Your previous reply was not valid JSON. Convert it to EXACTLY the required JSON (no commentary). Keep content; fix structure/keys if needed.";

pub const PLAIN_TEMPLATE_INTRO: &str =
    "Produce a quiz in the following PLAIN TEXT TEMPLATE (no JSON):";

pub const PLAIN_SOURCE_INSTRUCTION: &str = "Use ONLY this source (no invented facts):";

pub const PLAIN_NO_SOURCE_INSTRUCTION: &str =
    "If no source is provided, rely on broadly accepted fundamentals.";

pub const GENERATION_FAILED_MESSAGE: &str =
    "LLM returned content that could not be parsed as JSON or the plain template.";

pub const GENERATION_FAILED_HINT: &str = "Check the server logs for the raw and parsed content. Try fewer questions, a shorter source, or a different model.";
