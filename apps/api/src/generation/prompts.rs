// All prompt constants for the tailoring pipeline.
// Templates are filled with `.replace("{placeholder}", ...)` before sending.

/// System prompt for resume generation. Enforces JSON-only output.
pub const GENERATION_SYSTEM: &str = "You are an expert CV writer. You create professional, \
    ATS-friendly CVs tailored to job descriptions. \
    Always respond with valid JSON only.";

/// Resume generation prompt template. Replace `{job_text}` and `{skills}`
/// before sending. The embedded JSON skeleton is the schema contract the
/// generator's defensive parser expects back.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are an expert CV writer. Analyze the job description carefully and create a TAILORED CV that highlights the candidate's most relevant skills and experience for THIS SPECIFIC JOB.

JOB DESCRIPTION:
{job_text}

CANDIDATE INFORMATION:
{skills}

CRITICAL INSTRUCTIONS:
1. READ the job description carefully and identify the TOP 5 key requirements
2. REORDER and EMPHASIZE the candidate's experience to match those requirements
3. ONLY include skills that are relevant to this job (not every skill the candidate has)
4. REWRITE achievement bullet points to use similar language and keywords from the job posting
5. Put the most relevant work experience FIRST, even if it's not chronological
6. If the job emphasizes certain technologies or skills, make sure they appear prominently
7. The professional summary must directly address what this specific job is looking for
8. Each achievement should tie back to a requirement in the job description

EXAMPLE OF GOOD TAILORING:
- If job wants "Python" and "machine learning", put those skills at the TOP of skills list
- If job wants "team leadership", emphasize leadership achievements in experience
- If job mentions "microservices", use that exact term in relevant experience bullets
- Mirror the job posting's language and terminology

OUTPUT REQUIREMENTS:
Return ONLY valid JSON in this exact structure (no markdown, no explanations):
{
  "job_title": "Extract the job title from the job description",
  "name": "Full Name",
  "email": "email@example.com",
  "phone": "+20 123 456 7890",
  "location": "City, Country",
  "linkedin": "linkedin.com/in/profile",
  "github": "github.com/username",
  "summary": "2-3 sentence professional summary that directly addresses THIS job's requirements using keywords from the posting",
  "skills": ["List ONLY the 8-12 most relevant skills for THIS job, ordered by relevance"],
  "experience": [
    {
      "title": "Job Title",
      "company": "Company Name",
      "period": "Month Year - Month Year",
      "achievements": ["Rewritten achievement that matches job requirements", "Another achievement using job posting keywords"]
    }
  ],
  "education": [
    {
      "degree": "Degree Name",
      "institution": "University Name",
      "year": "Year"
    }
  ],
  "projects": [
    {
      "name": "Project Name (only include if relevant to THIS job)",
      "description": "Description highlighting relevant technologies mentioned in job posting"
    }
  ]
}

REMEMBER: This CV should look DIFFERENT for each job posting. Tailor everything!"#;

/// System prompt for requirement extraction. Enforces JSON-only output.
pub const REQUIREMENTS_SYSTEM: &str = "You extract job requirements from job postings. \
    Always respond with valid JSON only.";

/// Requirement extraction prompt template. Replace `{job_text}` before sending.
pub const REQUIREMENTS_PROMPT_TEMPLATE: &str = r#"You are a hiring manager and recruiter. Extract the core job requirements from the posting below.

JOB POSTING:
{job_text}

OUTPUT REQUIREMENTS:
- Return ONLY valid JSON.
- Use this exact structure:
{
  "job_title": "Short job title",
  "requirements": ["Short requirement 1", "Short requirement 2", "Short requirement 3"]
}
- The job_title should be 3 to 10 words.
- Each requirement should be concise (6-16 words).
- Prefer must-have qualifications, skills, responsibilities, and tools.
- Keep 6 to 12 items. No extra keys.
"#;
