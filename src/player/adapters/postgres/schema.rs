//! Diesel schema for player and attempt persistence.

diesel::table! {
    /// Registered players and their progression state.
    players (id) {
        /// Internal player identifier.
        id -> Uuid,
        /// External chat identity (unique).
        chat_id -> Int8,
        /// Display name shown for the player.
        #[max_length = 255]
        display_name -> Varchar,
        /// Optional platform handle, stored without the leading `@`.
        #[max_length = 255]
        handle -> Nullable<Varchar>,
        /// Accumulated score.
        score -> Int8,
        /// Progression state label.
        #[max_length = 50]
        progression -> Varchar,
        /// Open assignment, set only while progression is `assigned`.
        current_task_id -> Nullable<Uuid>,
        /// Registration timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only answer submission records.
    attempts (id) {
        /// Attempt identifier.
        id -> Uuid,
        /// Submitting player.
        player_id -> Uuid,
        /// Targeted task.
        task_id -> Uuid,
        /// Submitted answer text.
        answer_text -> Text,
        /// Verdict at submission time.
        correct -> Bool,
        /// Submission timestamp.
        submitted_at -> Timestamptz,
    }
}
