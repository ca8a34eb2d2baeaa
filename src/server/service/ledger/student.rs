use std::collections::HashMap;

use crate::{
    model::{
        progress::{ProgressDetailDto, ProgressPatchDto, ProgressSummaryDto},
        student::{StudentDetailDto, StudentFilter, StudentSummaryDto},
    },
    server::{
        data::{
            progress::ProgressRepository, progress_cap::ProgressCapRepository,
            student::StudentRepository,
        },
        error::{ledger::LedgerError, Error},
        service::ledger::{validate::validate_progress, LedgerService},
    },
};

impl<'a> LedgerService<'a> {
    /// Lists catalog students matching `filter` with the user's progress summary for each.
    ///
    /// Students are ordered by student ID; `progress` is `None` for students the user has
    /// never recorded.
    pub async fn list_students(
        &self,
        user_id: i32,
        filter: &StudentFilter,
    ) -> Result<Vec<StudentSummaryDto>, Error> {
        let students = StudentRepository::new(self.db).list(filter).await?;

        let student_ids: Vec<String> = students.iter().map(|s| s.student_id.clone()).collect();
        let progress_by_student: HashMap<String, ProgressSummaryDto> =
            ProgressRepository::new(self.db)
                .list_by_user_and_student_ids(user_id, &student_ids)
                .await?
                .iter()
                .map(|progress| (progress.student_id.clone(), ProgressSummaryDto::from(progress)))
                .collect();

        Ok(students
            .into_iter()
            .map(|student| StudentSummaryDto {
                progress: progress_by_student.get(&student.student_id).cloned(),
                student_id: student.student_id,
                name: student.name,
                role: student.role,
                position: student.position,
                attack_type: student.attack_type,
                defense_type: student.defense_type,
                rarity_base: student.rarity_base,
                is_limited: student.is_limited,
            })
            .collect())
    }

    /// Gets a catalog student with the user's full progress.
    ///
    /// # Returns
    /// - `Ok(StudentDetailDto)` - Student found, `progress` is `None` if never recorded
    /// - `Err(LedgerError::StudentNotFound)` - Student is not in the catalog
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_student_detail(
        &self,
        user_id: i32,
        student_id: &str,
    ) -> Result<StudentDetailDto, Error> {
        let student = StudentRepository::new(self.db)
            .get(student_id)
            .await?
            .ok_or_else(|| LedgerError::StudentNotFound {
                student_id: student_id.to_string(),
            })?;

        let progress = ProgressRepository::new(self.db)
            .get(user_id, student_id)
            .await?
            .map(ProgressDetailDto::from);

        Ok(StudentDetailDto {
            student_id: student.student_id,
            name: student.name,
            school: student.school,
            role: student.role,
            position: student.position,
            attack_type: student.attack_type,
            defense_type: student.defense_type,
            rarity_base: student.rarity_base,
            is_limited: student.is_limited,
            progress,
        })
    }

    /// Applies a partial progress update for a student.
    ///
    /// The patch is merged over the stored progress, or over the baseline progress when the
    /// user has none yet, and the merged record is validated in full against the current
    /// caps. Nothing is written unless validation passes.
    ///
    /// # Returns
    /// - `Ok(StudentDetailDto)` - Reloaded student detail with the saved progress
    /// - `Err(LedgerError::StudentNotFound)` - Student is not in the catalog
    /// - `Err(LedgerError)` - Merged progress violates a cap, the shard rule or the memo limit
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn upsert_student_progress(
        &self,
        user_id: i32,
        student_id: &str,
        patch: &ProgressPatchDto,
    ) -> Result<StudentDetailDto, Error> {
        let progress_repo = ProgressRepository::new(self.db);

        if StudentRepository::new(self.db).get(student_id).await?.is_none() {
            return Err(LedgerError::StudentNotFound {
                student_id: student_id.to_string(),
            }
            .into());
        }

        let merged = progress_repo
            .get(user_id, student_id)
            .await?
            .map(ProgressDetailDto::from)
            .unwrap_or_default()
            .apply(patch);

        let caps = ProgressCapRepository::new(self.db).list_all().await?;
        validate_progress(&merged, &caps)?;

        progress_repo.save(user_id, student_id, &merged).await?;

        tracing::debug!(user_id, student_id, "Saved student progress");

        self.get_student_detail(user_id, student_id).await
    }
}
