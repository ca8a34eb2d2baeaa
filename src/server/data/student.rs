use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QueryOrder,
};

use crate::model::student::StudentFilter;

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists catalog students matching the filter, ordered by student ID
    ///
    /// `q` is matched case-insensitively against the name and the student ID; every other
    /// filter field must match exactly. A blank `q` is ignored.
    pub async fn list(&self, filter: &StudentFilter) -> Result<Vec<entity::student::Model>, DbErr> {
        let mut condition = Condition::all();

        if let Some(q) = filter.q.as_deref().filter(|q| !q.trim().is_empty()) {
            let pattern = format!("%{}%", q.to_lowercase());
            condition = condition.add(
                Condition::any()
                    .add(Func::lower(Expr::col(entity::student::Column::Name)).like(pattern.clone()))
                    .add(Func::lower(Expr::col(entity::student::Column::StudentId)).like(pattern)),
            );
        }
        if let Some(school) = &filter.school {
            condition = condition.add(entity::student::Column::School.eq(school.as_str()));
        }
        if let Some(role) = &filter.role {
            condition = condition.add(entity::student::Column::Role.eq(role.as_str()));
        }
        if let Some(position) = &filter.position {
            condition = condition.add(entity::student::Column::Position.eq(position.as_str()));
        }
        if let Some(attack_type) = &filter.attack_type {
            condition = condition.add(entity::student::Column::AttackType.eq(attack_type.as_str()));
        }
        if let Some(defense_type) = &filter.defense_type {
            condition =
                condition.add(entity::student::Column::DefenseType.eq(defense_type.as_str()));
        }
        if let Some(is_limited) = filter.is_limited {
            condition = condition.add(entity::student::Column::IsLimited.eq(is_limited));
        }

        entity::prelude::Student::find()
            .filter(condition)
            .order_by_asc(entity::student::Column::StudentId)
            .all(self.db)
            .await
    }

    pub async fn get(&self, student_id: &str) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(student_id.to_string())
            .one(self.db)
            .await
    }

    /// Gets every catalog student among `student_ids`
    ///
    /// IDs missing from the catalog are skipped, compare the result against the input to
    /// find them.
    pub async fn get_by_ids(
        &self,
        student_ids: &[String],
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Student::find()
            .filter(entity::student::Column::StudentId.is_in(student_ids.to_vec()))
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod list {
        use ledger_test_utils::prelude::*;

        use crate::{model::student::StudentFilter, server::data::student::StudentRepository};

        /// Expect every student ordered by ID when no filter is given
        #[tokio::test]
        async fn lists_all_ordered_by_id() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_ledger_tables()
                .with_student("10002", "Aru")
                .with_student("10000", "Hoshino")
                .with_student("10001", "Shiroko")
                .build()
                .await?;

            let student_repo = StudentRepository::new(&test.db);
            let students = student_repo.list(&StudentFilter::default()).await?;

            let ids: Vec<&str> = students.iter().map(|s| s.student_id.as_str()).collect();
            assert_eq!(ids, vec!["10000", "10001", "10002"]);

            Ok(())
        }

        /// Expect `q` to match the name regardless of case
        #[tokio::test]
        async fn matches_name_case_insensitively() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_ledger_tables()
                .with_student("10000", "Hoshino")
                .with_student("10001", "Shiroko")
                .build()
                .await?;

            let student_repo = StudentRepository::new(&test.db);
            let filter = StudentFilter {
                q: Some("SHIRO".to_string()),
                ..Default::default()
            };
            let students = student_repo.list(&filter).await?;

            assert_eq!(students.len(), 1);
            assert_eq!(students[0].student_id, "10001");

            Ok(())
        }

        /// Expect `q` to match a substring of the student ID
        #[tokio::test]
        async fn matches_student_id() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_ledger_tables()
                .with_student("10000", "Hoshino")
                .with_student("20001", "Shiroko")
                .build()
                .await?;

            let student_repo = StudentRepository::new(&test.db);
            let filter = StudentFilter {
                q: Some("2000".to_string()),
                ..Default::default()
            };
            let students = student_repo.list(&filter).await?;

            assert_eq!(students.len(), 1);
            assert_eq!(students[0].name, "Shiroko");

            Ok(())
        }

        /// Expect exact filters to be combined with each other
        #[tokio::test]
        async fn applies_exact_filters() -> Result<(), TestError> {
            let test = TestBuilder::new().with_ledger_tables().build().await?;
            let mut limited = mock_student("10000", "Hoshino (Swimsuit)");
            limited.is_limited = true;
            limited.school = "Abydos".to_string();
            test.catalog().insert_student_model(limited).await?;
            let mut abydos = mock_student("10001", "Shiroko");
            abydos.school = "Abydos".to_string();
            test.catalog().insert_student_model(abydos).await?;
            test.catalog().insert_student("10002", "Yuuka").await?;

            let student_repo = StudentRepository::new(&test.db);
            let filter = StudentFilter {
                school: Some("Abydos".to_string()),
                is_limited: Some(false),
                ..Default::default()
            };
            let students = student_repo.list(&filter).await?;

            assert_eq!(students.len(), 1);
            assert_eq!(students[0].student_id, "10001");

            Ok(())
        }
    }

    mod get_by_ids {
        use ledger_test_utils::prelude::*;

        use crate::server::data::student::StudentRepository;

        /// Expect only students present in the catalog to be returned
        #[tokio::test]
        async fn skips_unknown_ids() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_ledger_tables()
                .with_student("10000", "Hoshino")
                .with_student("10001", "Shiroko")
                .build()
                .await?;

            let student_repo = StudentRepository::new(&test.db);
            let students = student_repo
                .get_by_ids(&["10001".to_string(), "99999".to_string()])
                .await?;

            assert_eq!(students.len(), 1);
            assert_eq!(students[0].student_id, "10001");

            Ok(())
        }

        /// Expect an empty result without querying for an empty ID list
        #[tokio::test]
        async fn returns_empty_for_no_ids() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let student_repo = StudentRepository::new(&test.db);
            let students = student_repo.get_by_ids(&[]).await?;

            assert!(students.is_empty());

            Ok(())
        }
    }
}
