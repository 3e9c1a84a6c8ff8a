//! Diesel schema for task bank persistence.

diesel::table! {
    /// Quiz task records forming the task bank.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description shown to players.
        description -> Text,
        /// Optional image reference shown with the task.
        #[max_length = 500]
        image_url -> Nullable<Varchar>,
        /// Accepted answer text.
        #[max_length = 500]
        answer -> Varchar,
        /// Points awarded for a correct answer.
        points -> Int4,
        /// Whether the task is in circulation.
        active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last revision timestamp.
        updated_at -> Timestamptz,
    }
}
