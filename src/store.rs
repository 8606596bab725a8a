use std::{collections::HashMap, str::FromStr};

use async_trait::async_trait;
use handle_errors::Error;
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
};

use crate::types::question::{Choice, ChoiceId, NewQuestion, Question, QuestionId};

/// Anything that can hand out the whole quiz, choices included, in one call.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn fetch_all_questions(&self) -> Result<Vec<Question>, Error>;
}

#[derive(Debug, Clone)]
pub struct Store {
    pub connection: SqlitePool,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);
        let db_pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Store {
            connection: db_pool,
        })
    }

    /// Private database living as long as the pool's single connection.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Store {
            connection: db_pool,
        })
    }

    pub async fn migrate(&self) -> Result<(), Error> {
        sqlx::migrate!()
            .run(&self.connection)
            .await
            .map_err(Error::MigrationError)
    }

    /// Replaces the whole quiz with `questions`, returning how many were stored.
    pub async fn seed(&self, questions: &[NewQuestion]) -> Result<usize, Error> {
        let mut tx = self
            .connection
            .begin()
            .await
            .map_err(Error::DatabaseQueryError)?;

        sqlx::query("DELETE FROM choices")
            .execute(&mut *tx)
            .await
            .map_err(Error::DatabaseQueryError)?;
        sqlx::query("DELETE FROM questions")
            .execute(&mut *tx)
            .await
            .map_err(Error::DatabaseQueryError)?;

        for new_question in questions {
            let question_id: i32 = sqlx::query("INSERT INTO questions (text) VALUES (?) RETURNING id")
                .bind(&new_question.text)
                .map(|row: SqliteRow| row.get("id"))
                .fetch_one(&mut *tx)
                .await
                .map_err(Error::DatabaseQueryError)?;

            for new_choice in &new_question.choices {
                sqlx::query("INSERT INTO choices (text, is_correct, question_id) VALUES (?, ?, ?)")
                    .bind(&new_choice.text)
                    .bind(new_choice.is_correct)
                    .bind(question_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(Error::DatabaseQueryError)?;
            }
        }

        tx.commit().await.map_err(Error::DatabaseQueryError)?;
        tracing::info!("Seeded {} questions", questions.len());
        Ok(questions.len())
    }
}

#[async_trait]
impl QuestionStore for Store {
    async fn fetch_all_questions(&self) -> Result<Vec<Question>, Error> {
        let mut tx = self
            .connection
            .begin()
            .await
            .map_err(Error::DatabaseQueryError)?;

        let mut questions: Vec<Question> = sqlx::query("SELECT id, text FROM questions ORDER BY id")
            .map(|row: SqliteRow| Question {
                id: QuestionId(row.get("id")),
                text: row.get("text"),
                choices: Vec::new(),
            })
            .fetch_all(&mut *tx)
            .await
            .map_err(Error::DatabaseQueryError)?;

        let choices: Vec<(QuestionId, Choice)> = sqlx::query(
            "SELECT id, text, is_correct, question_id FROM choices ORDER BY question_id, id",
        )
        .map(|row: SqliteRow| {
            (
                QuestionId(row.get("question_id")),
                Choice {
                    id: ChoiceId(row.get("id")),
                    text: row.get("text"),
                    is_correct: row.get("is_correct"),
                },
            )
        })
        .fetch_all(&mut *tx)
        .await
        .map_err(Error::DatabaseQueryError)?;

        tx.commit().await.map_err(Error::DatabaseQueryError)?;

        let index: HashMap<QuestionId, usize> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id, i))
            .collect();

        for (question_id, choice) in choices {
            if let Some(&i) = index.get(&question_id) {
                questions[i].choices.push(choice);
            }
        }

        tracing::debug!("Fetched {} questions", questions.len());
        Ok(questions)
    }
}
