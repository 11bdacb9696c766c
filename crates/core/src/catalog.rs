//! Built-in Study Content
//!
//! The hand-authored tables the skill ships with: a glossary of cloud
//! concepts, a bank of quiz questions and a list of study tips.

use crate::content::{ConceptEntry, QuizQuestion, StudyTip};

const CONCEPTS: &[(&str, &str)] = &[
    (
        "ec2",
        "Amazon EC2 is a web service that provides resizable compute capacity in the cloud. \
         You can think of it as virtual machines you rent by the hour or second.",
    ),
    (
        "s3",
        "Amazon S3 is a storage service for objects like files, images, and backups. \
         It is highly durable and scalable.",
    ),
    (
        "lambda",
        "AWS Lambda is a serverless compute service. You run code without managing servers, \
         and you only pay for the compute time you use.",
    ),
    (
        "vpc",
        "A Virtual Private Cloud, or VPC, is your private network inside AWS where you can \
         control IP ranges, subnets, and routing.",
    ),
    (
        "serverless",
        "Serverless means you do not manage servers directly. The cloud provider handles \
         scaling, patching, and infrastructure, and you focus only on your code.",
    ),
    (
        "rds",
        "Amazon RDS is a managed relational database service for engines like MySQL and PostgreSQL. \
         AWS handles backups, patching, and scaling.",
    ),
    (
        "dynamodb",
        "Amazon DynamoDB is a managed NoSQL database that offers single-digit millisecond \
         performance at any scale.",
    ),
    (
        "autoscaling",
        "Auto Scaling automatically increases or decreases the number of EC2 instances \
         based on demand.",
    ),
    (
        "cloudfront",
        "Amazon CloudFront is a content delivery network that caches content closer to \
         users to reduce latency.",
    ),
    (
        "region",
        "An AWS Region is a physical location in the world that contains multiple \
         Availability Zones.",
    ),
    (
        "availability zone",
        "An Availability Zone is one or more data centers within a Region, \
         designed for high availability.",
    ),
];

const QUESTIONS: &[(&str, &str, &str)] = &[
    (
        "What does EC2 stand for?",
        "Elastic Compute Cloud",
        "EC2 stands for Elastic Compute Cloud. It lets you launch virtual servers in the cloud.",
    ),
    (
        "Which AWS service is best for storing files and backups, EC2 or S3?",
        "S3",
        "S3 is designed for object storage like files, images, and backups.",
    ),
    (
        "Is AWS Lambda a serverless or virtual machine service?",
        "Serverless",
        "Lambda is a serverless compute service where AWS manages the servers for you.",
    ),
    (
        "Which service is a managed relational database: EC2 or RDS?",
        "RDS",
        "RDS is a managed relational database service; AWS handles backups and patching.",
    ),
    (
        "Which service is a managed NoSQL database: DynamoDB or CloudFront?",
        "DynamoDB",
        "DynamoDB is a managed NoSQL database; CloudFront is a content delivery network.",
    ),
    (
        "What AWS service is used as a content delivery network?",
        "CloudFront",
        "CloudFront caches content at edge locations to reduce latency for users.",
    ),
];

const TIPS: &[&str] = &[
    "Break your study time into 25 minute focus blocks with a 5 minute break in between. \
     This is called the Pomodoro Technique.",
    "Write down three specific tasks to finish today, like review EC2, finish one homework \
     problem set, and read one chapter.",
    "Study cloud concepts by explaining them out loud in simple language, like you are teaching a friend.",
    "Remove distractions by putting your phone in another room while you study for 30 minutes.",
    "Review one AWS service per day and write a one-paragraph summary in your own words.",
    "Mix cloud practice with school work: do 20 minutes of AWS labs, then 20 minutes of class assignments.",
    "Set a daily study window, even if it is only 30 minutes, and protect it like an appointment.",
];

/// The cloud concept glossary.
pub fn concepts() -> Vec<ConceptEntry> {
    CONCEPTS
        .iter()
        .map(|(key, explanation)| ConceptEntry::new(*key, *explanation))
        .collect()
}

/// The quiz question bank.
pub fn questions() -> Vec<QuizQuestion> {
    QUESTIONS
        .iter()
        .map(|(question, answer, explanation)| QuizQuestion::new(*question, *answer, *explanation))
        .collect()
}

/// The study tip list.
pub fn tips() -> Vec<StudyTip> {
    TIPS.iter().map(|tip| StudyTip::new(*tip)).collect()
}
