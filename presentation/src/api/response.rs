use application_ports::stream_channel::{StreamChannelConfirmation, StreamChannelError};
use axum::http::StatusCode;
use axum::Json;
use domain_shared::stream_channel::StreamChannelField;
use serde::Serialize;
use tracing::instrument;

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub type ApiResponse = (StatusCode, Json<MessageResponse>);

#[instrument(level = "debug", skip_all)]
pub fn respond(result: Result<StreamChannelConfirmation, StreamChannelError>) -> ApiResponse {
    let (status, message) = match result {
        Ok(confirmation) => (
            confirmation_status(confirmation),
            confirmation_message(confirmation).to_string(),
        ),
        Err(error) => (error_status(&error), error_message(&error)),
    };

    (status, Json(MessageResponse { message }))
}

pub fn confirmation_status(confirmation: StreamChannelConfirmation) -> StatusCode {
    match confirmation {
        StreamChannelConfirmation::Created => StatusCode::CREATED,
        StreamChannelConfirmation::Updated
        | StreamChannelConfirmation::Cleared
        | StreamChannelConfirmation::Deleted => StatusCode::OK,
    }
}

pub fn confirmation_message(confirmation: StreamChannelConfirmation) -> &'static str {
    match confirmation {
        StreamChannelConfirmation::Created => "Canal de stream criado com sucesso!",
        StreamChannelConfirmation::Updated => "Canal de stream alterado com sucesso!",
        StreamChannelConfirmation::Cleared => "Canal de stream limpo com sucesso!",
        StreamChannelConfirmation::Deleted => "Canal de stream excluído com sucesso!",
    }
}

pub fn error_status(error: &StreamChannelError) -> StatusCode {
    match error {
        StreamChannelError::AlreadyExists => StatusCode::CONFLICT,
        StreamChannelError::InvalidCharacters(_)
        | StreamChannelError::Required(_)
        | StreamChannelError::InvalidFormat(_)
        | StreamChannelError::TooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        StreamChannelError::NotFound => StatusCode::NOT_FOUND,
        StreamChannelError::CreateFailed
        | StreamChannelError::UpdateFailed
        | StreamChannelError::ClearFailed => StatusCode::INTERNAL_SERVER_ERROR,
        StreamChannelError::TemporaryUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn error_message(error: &StreamChannelError) -> String {
    match error {
        StreamChannelError::AlreadyExists => {
            "Erro: Já existe cadastro com este id. verifique!".to_string()
        }
        StreamChannelError::CreateFailed => {
            "Erro ao criar canal de stream. verifique!".to_string()
        }
        StreamChannelError::InvalidCharacters(field) => format!(
            "O campo {} não pode conter caracteres especiais!",
            field_label(*field)
        ),
        StreamChannelError::Required(field) => format!(
            "O campo {} é de preenchimento obrigatório!",
            field_label(*field)
        ),
        StreamChannelError::InvalidFormat(field) => {
            format!("O campo {} é inválido!", field_label(*field))
        }
        StreamChannelError::TooLong { field, max_len } => format!(
            "O campo {} deve ter no maximo {} caracteres!",
            field_label(*field),
            max_len
        ),
        StreamChannelError::NotFound => {
            "Não existe canal de stream para o usuário. Procure um administrador!".to_string()
        }
        StreamChannelError::UpdateFailed => {
            "Erro ao alterar canal de stream. Procure um administrador!".to_string()
        }
        StreamChannelError::ClearFailed => {
            "Erro ao limpar canal de stream. Procure um administrador!".to_string()
        }
        StreamChannelError::TemporaryUnavailable => {
            "Serviço temporariamente indisponível. Tente novamente mais tarde!".to_string()
        }
    }
}

fn field_label(field: StreamChannelField) -> &'static str {
    match field {
        StreamChannelField::Nickname => "nick stream",
        StreamChannelField::ChannelLink => "link do canal",
        StreamChannelField::Platform => "plataforma",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_reachable_condition_has_its_own_message() {
        let errors = [
            StreamChannelError::AlreadyExists,
            StreamChannelError::CreateFailed,
            StreamChannelError::InvalidCharacters(StreamChannelField::Nickname),
            StreamChannelError::InvalidCharacters(StreamChannelField::ChannelLink),
            StreamChannelError::Required(StreamChannelField::Nickname),
            StreamChannelError::Required(StreamChannelField::ChannelLink),
            StreamChannelError::Required(StreamChannelField::Platform),
            StreamChannelError::InvalidFormat(StreamChannelField::Platform),
            StreamChannelError::TooLong {
                field: StreamChannelField::Nickname,
                max_len: 20,
            },
            StreamChannelError::TooLong {
                field: StreamChannelField::ChannelLink,
                max_len: 50,
            },
            StreamChannelError::NotFound,
            StreamChannelError::UpdateFailed,
            StreamChannelError::ClearFailed,
            StreamChannelError::TemporaryUnavailable,
        ];
        let confirmations = [
            StreamChannelConfirmation::Created,
            StreamChannelConfirmation::Updated,
            StreamChannelConfirmation::Cleared,
            StreamChannelConfirmation::Deleted,
        ];

        let messages: HashSet<String> = errors
            .iter()
            .map(error_message)
            .chain(
                confirmations
                    .iter()
                    .map(|c| confirmation_message(*c).to_string()),
            )
            .collect();

        assert_eq!(messages.len(), errors.len() + confirmations.len());
    }

    #[test]
    fn too_long_message_names_the_limit() {
        let message = error_message(&StreamChannelError::TooLong {
            field: StreamChannelField::Nickname,
            max_len: 20,
        });

        assert_eq!(message, "O campo nick stream deve ter no maximo 20 caracteres!");
    }

    #[test]
    fn statuses_follow_the_outcome() {
        assert_eq!(
            confirmation_status(StreamChannelConfirmation::Created),
            StatusCode::CREATED
        );
        assert_eq!(
            confirmation_status(StreamChannelConfirmation::Deleted),
            StatusCode::OK
        );
        assert_eq!(
            error_status(&StreamChannelError::AlreadyExists),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_status(&StreamChannelError::Required(StreamChannelField::Platform)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            error_status(&StreamChannelError::NotFound),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&StreamChannelError::ClearFailed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            error_status(&StreamChannelError::TemporaryUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
