// Prompt template for cover letter generation.
// Placeholders: {company}, {position}, {description}, {cv}

/// Cover letter prompt template. Replace every placeholder before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Generate a professional and compelling cover letter for the position of {position} at {company}.
The cover letter should be tailored to this role description: {description}

Use the following information from the applicant's CV to highlight relevant skills and experience:
{cv}

Follow these guidelines when writing the cover letter:
1. Open with a strong paragraph that expresses enthusiasm for the position and briefly introduces the applicant.
2. In the body, highlight 2-3 key qualifications or experiences from the CV that directly match the role requirements. Give specific examples or achievements where possible.
3. Show knowledge of {company} and explain why the applicant wants to join their team.
4. Include a paragraph connecting the applicant's skills and experience to the specific needs of the role, showing how they would contribute to the company's success.
5. Close with a strong paragraph that restates interest in the position and the company, and invites further discussion.
6. Keep the letter to one page at most, professionally formatted, and suited to the company culture and industry.
7. Keep the tone polite and confident throughout, balancing professionalism with personality.
8. Work in relevant keywords from the role description so the letter passes applicant tracking systems (ATS).
9. End with a professional sign-off followed by the applicant's full name.

The letter must be concise, professionally formatted, and show genuine enthusiasm for the role and the company."#;
