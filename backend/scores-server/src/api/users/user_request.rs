use scores_core::UserFields;

use serde::Deserialize;

/// Body of `POST /user` and `PUT /user/{id}`.
///
/// Unknown keys are ignored, `id` included: the identity always comes from
/// the store on create and from the path on update.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub name: String,
    #[serde(alias = "highscore")]
    pub high_score: u32,
}

impl From<UserRequest> for UserFields {
    fn from(req: UserRequest) -> Self {
        UserFields::new(req.name, req.high_score)
    }
}
