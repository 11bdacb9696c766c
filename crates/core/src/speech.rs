//! Everything the skill says out loud, apart from the study content itself.

pub const WELCOME: &str = "Welcome to Cloud Study Buddy. You can ask me to explain a cloud concept, \
     quiz you on cloud, or give you a study tip. What would you like to do?";
pub const WELCOME_REPROMPT: &str = "What would you like to do?";

pub const ASK_FOR_CONCEPT: &str = "Which cloud concept do you want me to explain, like EC2, S3, Lambda, \
     V P C, or serverless?";
pub const CONCEPT_REPROMPT: &str = "What else would you like to know?";

pub const QUIZ_REPROMPT: &str = "Want another question or a cloud concept explained?";
pub const TIP_REPROMPT: &str = "Would you like another tip or a cloud concept?";

pub const HELP: &str = "You can say things like, explain EC2, quiz me on cloud, \
     or give me a study tip. What would you like to try?";

pub const GOODBYE: &str = "Good luck with your cloud studies. Bye!";

pub const FALLBACK: &str = "I'm not sure which cloud concept you meant. \
     Try asking something like, what is E C 2, what is S 3, or explain Lambda.";
pub const FALLBACK_REPROMPT: &str = "Which cloud concept would you like to hear about?";

pub const NOT_UNDERSTOOD: &str =
    "Sorry, I didn't understand that. You can ask me to explain a cloud concept, \
     quiz you, or give you a study tip.";

pub fn concept_not_found(raw: &str) -> String {
    format!(
        "I don't have an explanation for {raw} yet. \
         Try asking about EC2, S3, Lambda, V P C, or serverless."
    )
}

pub fn quiz(question: &str, answer: &str, explanation: &str) -> String {
    format!(
        "Here is your question: {question} \
         The correct answer is: {answer}. {explanation} {QUIZ_REPROMPT}"
    )
}

pub fn study_tip(tip: &str) -> String {
    format!("Here is a study tip: {tip}")
}
