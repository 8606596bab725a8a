use crate::types::question::{NewChoice, NewQuestion};

/// The quiz the service ships with.
pub fn default_questions() -> Vec<NewQuestion> {
    vec![
        NewQuestion {
            text: "What is the primary web framework used in this application's backend?".to_string(),
            choices: vec![
                NewChoice::new("Actix Web", false),
                NewChoice::new("warp", true),
                NewChoice::new("Rocket", false),
            ],
        },
        NewQuestion {
            text: "Which crate is used for serializing and deserializing request payloads?".to_string(),
            choices: vec![
                NewChoice::new("bincode", false),
                NewChoice::new("serde", true),
                NewChoice::new("prost", false),
            ],
        },
        NewQuestion {
            text: "What does CORS stand for in the context of web servers?".to_string(),
            choices: vec![
                NewChoice::new("Cross-Origin Resource Sharing", true),
                NewChoice::new("Cross-Origin Request Security", false),
                NewChoice::new("Common Origin Resource Sharing", false),
            ],
        },
        NewQuestion {
            text: "Which frontend framework is this project planned to use?".to_string(),
            choices: vec![
                NewChoice::new("Next.js", true),
                NewChoice::new("React (CRA)", false),
                NewChoice::new("Vue.js", false),
            ],
        },
        NewQuestion {
            text: "What type of database is being used in this project?".to_string(),
            choices: vec![
                NewChoice::new("PostgreSQL", false),
                NewChoice::new("MySQL", false),
                NewChoice::new("SQLite", true),
            ],
        },
    ]
}
