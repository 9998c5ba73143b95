use chrono::Utc;
use sea_orm::prelude::{DateTimeWithTimeZone, Uuid};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

type ColumnOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Column;

/// Identity and timestamp bookkeeping shared by every table.
///
/// Implementors name their columns; `stamp` is called from `before_save`.
pub trait Audited: ActiveModelTrait + Sized {
    const ID: ColumnOf<Self>;
    const CREATED_AT: ColumnOf<Self>;
    const UPDATED_AT: Option<ColumnOf<Self>>;

    /// On insert: fills a missing id and the creation time. On update: drops
    /// any change to the creation time so the stored value is kept.
    fn stamp(mut self, insert: bool) -> Self {
        let now: DateTimeWithTimeZone = Utc::now().into();

        if insert {
            if matches!(self.get(Self::ID), ActiveValue::NotSet) {
                self.set(Self::ID, Uuid::new_v4().into());
            }
            self.set(Self::CREATED_AT, now.into());
        } else {
            self.not_set(Self::CREATED_AT);
        }

        if let Some(updated_at) = Self::UPDATED_AT {
            self.set(updated_at, now.into());
        }

        self
    }
}
