// Prompt constants for resume analysis.

/// Fixed instructions sent ahead of every resume / job description pair.
///
/// The three-section layout is a request to the model, not something the
/// analyzer parses or enforces.
pub const ATS_SCANNER_PROMPT: &str = "
You are a skilled ATS (Applicant Tracking System) scanner with a deep understanding of data science and software engineering. 
Your task is to evaluate the resume against the provided job description. 
Please provide your response in the following clear structure:

1. **Match Percentage**: Give a score out of 100% based on keywords and skills match.
2. **Missing Keywords**: List the specific important keywords from the JD that are missing in the resume.
3. **Profile Summary**: A brief evaluation of the candidate's profile.
";

pub const RESUME_HEADER: &str = "Resume Text:";
pub const JOB_DESCRIPTION_HEADER: &str = "Job Description:";
