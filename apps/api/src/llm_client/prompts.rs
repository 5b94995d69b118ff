// Shared prompt constants. Placeholders use `{name}` and are filled with `str::replace`.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Skill extraction. Placeholder: `{text}`.
pub const SKILL_EXTRACTION_PROMPT: &str = r#"You are an expert resume and job description analyzer. Extract all skills from the following text.

Categorize the skills into these groups:
1. technicalSkills: Programming concepts, algorithms, data structures, methodologies (e.g., REST APIs, Microservices, CI/CD)
2. softSkills: Communication, leadership, teamwork, problem-solving abilities
3. tools: Specific software, platforms, and tools (e.g., Git, Docker, AWS, Jira)
4. frameworks: Programming frameworks and libraries (e.g., React, Node.js, Django, Spring)
5. languages: Programming languages (e.g., JavaScript, Python, Java, TypeScript)

IMPORTANT:
- Extract ONLY skills that are explicitly mentioned or strongly implied
- Normalize skill names (e.g., "JS" -> "JavaScript", "node" -> "Node.js")
- Remove duplicates
- Keep skills concise (1-3 words each)

Return ONLY valid JSON in this exact format, no additional text:
{
  "technicalSkills": ["skill1", "skill2"],
  "softSkills": ["skill1", "skill2"],
  "tools": ["tool1", "tool2"],
  "frameworks": ["framework1", "framework2"],
  "languages": ["language1", "language2"]
}

Text to analyze:
{text}"#;

/// Improvement suggestions. Placeholders: `{resume_skills}`, `{job_skills}`,
/// `{matched_skills}`, `{missing_skills}` (JSON arrays), `{match_percentage}`.
pub const SUGGESTIONS_PROMPT: &str = r#"You are a career advisor helping improve resume-job matching. Based on the analysis below, provide actionable suggestions.

Resume Skills: {resume_skills}
Job Required Skills: {job_skills}
Matched Skills: {matched_skills}
Missing Skills: {missing_skills}
Match Percentage: {match_percentage}%

Provide 3-5 specific, actionable suggestions to improve the resume for this job. Focus on:
1. How to highlight existing relevant skills better
2. Which missing skills are most critical to add
3. How to address skill gaps (courses, projects, certifications)
4. Resume formatting or presentation improvements

Return ONLY a JSON array of suggestion strings, no additional text:
["suggestion1", "suggestion2", "suggestion3"]"#;

/// Resume quality check. Placeholder: `{resume_text}`.
pub const QUALITY_CHECK_PROMPT: &str = r#"You are a resume analysis engine.

Evaluate the quality and suitability of the resume text for skill extraction and job matching.

Rules:
- Assess clarity, structure, and completeness of information.
- Check for presence of meaningful professional content.
- Detect excessive noise, repetition, or meaningless text.
- Do NOT attempt to infer or add missing information.
- Do NOT analyze skills in this step.

Quality levels:
- excellent: clear sections, detailed content, well structured
- good: mostly clear with minor issues
- average: usable but lacks detail or structure
- poor: very little useful information or heavily unstructured

Return STRICT JSON only in the following format:
{
  "isSuitable": boolean,
  "quality": "excellent" | "good" | "average" | "poor",
  "issues": string[],
  "summary": string
}

Resume Text:
{resume_text}"#;
