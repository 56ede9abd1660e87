//! Fixed prompt templates, one per question type.

use super::PromptRequest;

fn vocab_list(req: &PromptRequest<'_>) -> String {
    req.vocabulary.join(", ")
}

pub(super) fn cloze(req: &PromptRequest<'_>) -> String {
    format!(
        r#"Generate {count} 200-word cloze test passage for grade {grade} students.
Each passage should have **10 blanks**, where **each blank requires a single missing word**.
Each blank must have **four multiple-choice answer options (A, B, C, D)**.

**Sentence Complexity:** {sentence_rule}.

**Vocabulary Reference:** Use these words as much as possible:
[{vocab}]

**Format:**
### **Passage:**
{{Generated passage with 10 blanks, numbered (e.g., "The boy went to the ___ (1) after school.")}}

### **Questions:**
1. (1)
  - A) Option 1
  - B) Option 2
  - C) Option 3
  - D) Option 4
...
10. (10)
  - A) Option 1
  - B) Option 2
  - C) Option 3
  - D) Option 4

**Answer Key:**
1. Correct Answer
2. Correct Answer
...
10. Correct Answer
"#,
        count = req.count,
        grade = req.grade,
        sentence_rule = req.sentence_difficulty.sentence_rule(),
        vocab = vocab_list(req),
    )
}

pub(super) fn short_dialogue(req: &PromptRequest<'_>) -> String {
    format!(
        r#"You are an AI English test generator for students in a public school system.
Your task is to create {count} short dialogue listening comprehension question for grade {grade} students.

**Sentence Complexity:** {sentence_rule}.
**Vocabulary Complexity:** {vocab_tier}.
**Inference:** {inference_rule}

**Each Short Dialogue Listening Comprehension Rules:**
- Generate a short conversation between two speakers (2-4 sentences).
- The dialogue should be natural and cover **everyday situations**.
- Generate **one** multiple-choice question (A, B, C, D).
- Ensure that the answer choices are **plausible but only one is correct**.

**Format:**
### **Listening Script:**
{{Generated short conversation}}

**Question:**
1. {{Question about the dialogue}}
  - A) {{Option A}}
  - B) {{Option B}}
  - C) {{Option C}}
  - D) {{Option D}}

**Answer Key:** {{Correct Answer}}
"#,
        count = req.count,
        grade = req.grade,
        sentence_rule = req.sentence_difficulty.sentence_rule(),
        vocab_tier = req.vocab_difficulty,
        inference_rule = req.inference_difficulty.inference_rule(),
    )
}

pub(super) fn long_dialogue(req: &PromptRequest<'_>) -> String {
    format!(
        r#"You are an AI English test generator for students in a public school system.
Your task is to create {count} long dialogue listening comprehension passage for grade {grade} students.

**Sentence Complexity:** {sentence_rule}.
**Vocabulary Complexity:** {vocab_tier}.
**Inference:** {inference_rule}

**Each Long Dialogue Listening Comprehension Rules:**
- Generate a long conversation (150-250 words) between two speakers.
- The conversation should be **natural and related to real-life situations** (e.g., school, family, shopping, travel, hobbies).
- Generate **three** multiple-choice questions (A, B, C, D).
- Ensure each question tests **different aspects** of the dialogue (e.g., main idea, details, inference).

**Format:**
### **Listening Script:**
{{Generated long conversation}}

**Questions:**
1. {{Question 1 about the dialogue}}
  - A) {{Option A}}
  - B) {{Option B}}
  - C) {{Option C}}
  - D) {{Option D}}

2. {{Question 2 about the dialogue}}
  - A) {{Option A}}
  - B) {{Option B}}
  - C) {{Option C}}
  - D) {{Option D}}

3. {{Question 3 about the dialogue}}
  - A) {{Option A}}
  - B) {{Option B}}
  - C) {{Option C}}
  - D) {{Option D}}

**Answer Key:**
1. {{Correct Answer for Q1}}
2. {{Correct Answer for Q2}}
3. {{Correct Answer for Q3}}
"#,
        count = req.count,
        grade = req.grade,
        sentence_rule = req.sentence_difficulty.sentence_rule(),
        vocab_tier = req.vocab_difficulty,
        inference_rule = req.inference_difficulty.inference_rule(),
    )
}

pub(super) fn essay(req: &PromptRequest<'_>) -> String {
    format!(
        r#"You are an AI English writing test generator for students in a public school system.
Your task is to create {count} writing task for {grade} grade students.

**Difficulty Level:** The difficulty should be appropriate for {grade} grade students.
The vocabulary should primarily focus on {grade} grade words, while also including words from previous grades if necessary.

**Sentence Complexity:** {sentence_rule}.
**Vocabulary Reference:** {vocab_tier}.

**Writing Task:**
- Provide a **writing prompt** suitable for grade {grade}.
- Generate a **sample essay** (120-300 words depending on the grade level).
- Ensure it follows good writing structure and vocabulary usage.

**Format:**
### Writing Prompt
{{Generated writing topic}}

### Sample Essay
{{A well-structured sample essay}}
"#,
        count = req.count,
        grade = req.grade,
        sentence_rule = req.sentence_difficulty.sentence_rule(),
        vocab_tier = req.vocab_difficulty,
    )
}

pub(super) fn generic(req: &PromptRequest<'_>, tag: &str) -> String {
    format!(
        r#"Generate {count} {tag} questions for grade {grade} students.

**Sentence Complexity:** {sentence_rule}.
**Inference:** {inference_rule}
**Vocabulary Reference:** Use these words as much as possible:
[{vocab}]

**Format:**
### Part 1: Questions
1. {{Question 1}}
2. {{Question 2}}
...
{count}. {{Question N}}

### Part 2: Answers
1. {{Answer 1}}
2. {{Answer 2}}
...
{count}. {{Answer N}}
"#,
        count = req.count,
        grade = req.grade,
        sentence_rule = req.sentence_difficulty.sentence_rule(),
        inference_rule = req.inference_difficulty.inference_rule(),
        vocab = vocab_list(req),
    )
}
