//! Review row <-> entity mapper

use roam_core::{DomainError, Id, Review, ReviewType, UserRef};

use super::bad_enum;
use crate::models::ReviewModel;

impl TryFrom<ReviewModel> for Review {
    type Error = DomainError;

    fn try_from(model: ReviewModel) -> Result<Self, Self::Error> {
        let review_type = ReviewType::parse(&model.review_type)
            .ok_or_else(|| bad_enum("review_type", &model.review_type))?;

        Ok(Review {
            id: Id::from_uuid(model.id),
            author: UserRef {
                id: Id::from_uuid(model.author_id),
                fullname: model.author_fullname,
                nickname: model.author_nickname,
                profile_pic: model.author_profile_pic,
            },
            recipient_id: Id::from_uuid(model.recipient_id),
            rating: model.rating,
            comment: model.comment,
            review_type,
            is_visible: model.is_visible,
            created_at: model.created_at,
        })
    }
}
