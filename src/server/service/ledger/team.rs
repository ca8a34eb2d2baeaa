use std::collections::HashMap;

use crate::{
    model::{
        progress::ProgressSummaryDto,
        team::{TeamDetailDto, TeamMemberDetailDto, TeamMemberInputDto, TeamMode, TeamSummaryDto},
    },
    server::{
        data::{
            progress::ProgressRepository,
            student::StudentRepository,
            team::TeamRepository,
            team_member::{NewTeamMember, TeamMemberRepository},
            team_mode_rule::TeamModeRuleRepository,
        },
        error::{ledger::LedgerError, Error},
        service::ledger::{validate::validate_team_members, LedgerService},
    },
};

/// Parses the stored mode of a team
fn team_mode(team: &entity::team::Model) -> Result<TeamMode, LedgerError> {
    team.mode
        .parse()
        .map_err(|_| LedgerError::UnknownTeamMode {
            team_id: team.id,
            mode: team.mode.clone(),
        })
}

impl<'a> LedgerService<'a> {
    /// Lists the user's teams with member counts, most recently updated first.
    pub async fn list_teams(
        &self,
        user_id: i32,
        mode: Option<TeamMode>,
    ) -> Result<Vec<TeamSummaryDto>, Error> {
        let teams = TeamRepository::new(self.db)
            .list(user_id, mode.as_ref().map(TeamMode::as_str))
            .await?;

        let mut summaries = Vec::with_capacity(teams.len());
        for (team, member_count) in teams {
            summaries.push(TeamSummaryDto {
                mode: team_mode(&team)?,
                team_id: team.id,
                name: team.name,
                memo: team.memo,
                member_count,
                updated_at: team.updated_at.and_utc(),
            });
        }

        Ok(summaries)
    }

    /// Gets a team owned by the user with its members ordered by position.
    ///
    /// # Returns
    /// - `Ok(TeamDetailDto)` - Team with each member's student name and progress summary
    /// - `Err(LedgerError::TeamNotFound)` - Team missing or owned by another user
    /// - `Err(LedgerError::DanglingTeamMember)` - A member references a student missing from
    ///   the catalog
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_team(&self, user_id: i32, team_id: i32) -> Result<TeamDetailDto, Error> {
        let team = TeamRepository::new(self.db)
            .get(user_id, team_id)
            .await?
            .ok_or(LedgerError::TeamNotFound { team_id })?;
        let mode = team_mode(&team)?;

        let members = TeamMemberRepository::new(self.db).list(team.id).await?;
        let student_ids: Vec<String> = members.iter().map(|m| m.student_id.clone()).collect();

        let student_names: HashMap<String, String> = StudentRepository::new(self.db)
            .get_by_ids(&student_ids)
            .await?
            .into_iter()
            .map(|student| (student.student_id, student.name))
            .collect();
        let progress_by_student: HashMap<String, ProgressSummaryDto> =
            ProgressRepository::new(self.db)
                .list_by_user_and_student_ids(user_id, &student_ids)
                .await?
                .iter()
                .map(|progress| (progress.student_id.clone(), ProgressSummaryDto::from(progress)))
                .collect();

        let mut member_details = Vec::with_capacity(members.len());
        for member in members {
            let student_name = student_names.get(&member.student_id).cloned().ok_or_else(|| {
                LedgerError::DanglingTeamMember {
                    team_id: team.id,
                    student_id: member.student_id.clone(),
                }
            })?;

            member_details.push(TeamMemberDetailDto {
                progress: progress_by_student.get(&member.student_id).cloned(),
                student_id: member.student_id,
                position_index: member.position_index,
                is_support: member.is_support,
                student_name,
            });
        }

        Ok(TeamDetailDto {
            team_id: team.id,
            name: team.name,
            mode,
            memo: team.memo,
            created_at: team.created_at.and_utc(),
            updated_at: team.updated_at.and_utc(),
            members: member_details,
        })
    }

    /// Replaces every member of a team owned by the user.
    ///
    /// The list is validated against the slot count of the team's mode and every student ID
    /// is resolved against the catalog before the store is touched. The replacement itself
    /// is a single transaction.
    ///
    /// # Returns
    /// - `Ok(TeamDetailDto)` - Reloaded team with the new members
    /// - `Err(LedgerError::TeamNotFound)` - Team missing or owned by another user
    /// - `Err(LedgerError::MissingModeRule)` - No slot rule configured for the team's mode
    /// - `Err(LedgerError)` - Member list violates the slot rules
    /// - `Err(LedgerError::UnknownStudents)` - Some student IDs are not in the catalog
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn replace_team_members(
        &self,
        user_id: i32,
        team_id: i32,
        members: &[TeamMemberInputDto],
    ) -> Result<TeamDetailDto, Error> {
        let team = TeamRepository::new(self.db)
            .get(user_id, team_id)
            .await?
            .ok_or(LedgerError::TeamNotFound { team_id })?;

        let rule = TeamModeRuleRepository::new(self.db)
            .get(&team.mode)
            .await?
            .ok_or_else(|| LedgerError::MissingModeRule {
                mode: team.mode.clone(),
            })?;

        validate_team_members(members, rule.slot_count)?;

        // Duplicates were rejected above, so the IDs are already unique
        let student_ids: Vec<String> = members.iter().map(|m| m.student_id.clone()).collect();
        let found = StudentRepository::new(self.db)
            .get_by_ids(&student_ids)
            .await?;
        if found.len() != student_ids.len() {
            let missing_student_ids: Vec<String> = student_ids
                .into_iter()
                .filter(|id| !found.iter().any(|student| &student.student_id == id))
                .collect();

            return Err(LedgerError::UnknownStudents {
                missing_student_ids,
            }
            .into());
        }

        let new_members: Vec<NewTeamMember> = members
            .iter()
            .map(|member| NewTeamMember {
                student_id: member.student_id.clone(),
                position_index: member.position_index,
                is_support: member.is_support.unwrap_or(false),
            })
            .collect();
        TeamMemberRepository::new(self.db)
            .replace_all(team.id, &new_members)
            .await?;

        tracing::debug!(
            user_id,
            team_id,
            member_count = new_members.len(),
            "Replaced team members"
        );

        self.get_team(user_id, team_id).await
    }
}
