//! Database seeder for HRIS development and testing.
//!
//! Seeds departments, positions, three employees with login passwords and
//! position assignments, time management and performance reference data, one
//! draft of every payroll configuration kind and the company settings document.
//!
//! Every step skips rows that already exist, so the seeder can be re-run.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde_json::json;
use uuid::Uuid;

use hris_core::auth::hash_password;
use hris_core::payroll::{Applicability, PolicyType, RuleDefinition};
use hris_db::entities::{
    allowances, appraisal_cycles, appraisal_templates, benefits, departments, employee_profiles,
    employee_system_roles, holidays, insurance_brackets, lateness_rules, overtime_rules,
    pay_grades, pay_types, payroll_policies, position_assignments, positions, schedule_rules,
    shift_types, shifts, signing_bonuses, tax_rules,
};
use hris_db::repositories::{
    CreateAllowanceInput, CreateBenefitInput, CreateInsuranceBracketInput, CreatePayGradeInput,
    CreatePayTypeInput, CreatePolicyInput, CreateSigningBonusInput, CreateTaxRuleInput,
};
use hris_db::{CompanySettingsRepository, ConfigRepository};

/// Password given to every seeded employee.
const SEED_PASSWORD: &str = "Password123!";

const HR_DEPT: Uuid = Uuid::from_u128(0x0100);
const ENG_DEPT: Uuid = Uuid::from_u128(0x0101);
const SALES_DEPT: Uuid = Uuid::from_u128(0x0102);

const HR_MANAGER_POS: Uuid = Uuid::from_u128(0x0200);
const SOFTWARE_ENG_POS: Uuid = Uuid::from_u128(0x0201);
const SALES_REP_POS: Uuid = Uuid::from_u128(0x0202);

const ALICE: Uuid = Uuid::from_u128(0x0300);
const BOB: Uuid = Uuid::from_u128(0x0301);
const CHARLIE: Uuid = Uuid::from_u128(0x0302);

const MORNING_SHIFT_TYPE: Uuid = Uuid::from_u128(0x0400);

const ANNUAL_TEMPLATE: Uuid = Uuid::from_u128(0x0500);

struct Seeder {
    db: DatabaseConnection,
    now: DateTimeWithTimeZone,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = hris_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let seeder = Seeder {
        db,
        now: Utc::now().into(),
    };

    println!("Seeding organization structure...");
    seeder.organization().await?;

    println!("Seeding employees...");
    seeder.employees().await?;

    println!("Seeding time management...");
    seeder.time_management().await?;

    println!("Seeding performance templates...");
    seeder.performance().await?;

    println!("Seeding payroll configuration drafts...");
    seeder.payroll_configuration().await?;

    println!("Seeding company settings...");
    seeder.company_settings().await?;

    println!("Seeding complete!");
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid date {y}-{m}-{d}"))
}

fn time(h: u32, m: u32) -> anyhow::Result<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0).with_context(|| format!("invalid time {h}:{m}"))
}

impl Seeder {
    async fn organization(&self) -> anyhow::Result<()> {
        let depts = [
            (HR_DEPT, "HR-001", "Human Resources"),
            (ENG_DEPT, "ENG-001", "Engineering"),
            (SALES_DEPT, "SALES-001", "Sales"),
        ];
        for (id, code, name) in depts {
            if departments::Entity::find_by_id(id).one(&self.db).await?.is_some() {
                println!("  Department {code} already exists, skipping...");
                continue;
            }
            departments::ActiveModel {
                id: Set(id),
                code: Set(code.to_string()),
                name: Set(name.to_string()),
                description: Set(None),
                is_active: Set(true),
                created_at: Set(self.now),
                updated_at: Set(self.now),
            }
            .insert(&self.db)
            .await?;
            println!("  Created department: {name}");
        }

        let titles = [
            (HR_MANAGER_POS, "POS-HR-MGR", "HR Manager", HR_DEPT),
            (SOFTWARE_ENG_POS, "POS-SWE", "Software Engineer", ENG_DEPT),
            (SALES_REP_POS, "POS-SALES-REP", "Sales Representative", SALES_DEPT),
        ];
        for (id, code, title, department_id) in titles {
            if positions::Entity::find_by_id(id).one(&self.db).await?.is_some() {
                println!("  Position {code} already exists, skipping...");
                continue;
            }
            positions::ActiveModel {
                id: Set(id),
                code: Set(code.to_string()),
                title: Set(title.to_string()),
                description: Set(None),
                department_id: Set(department_id),
                is_active: Set(true),
                created_at: Set(self.now),
                updated_at: Set(self.now),
            }
            .insert(&self.db)
            .await?;
            println!("  Created position: {title}");
        }
        Ok(())
    }

    async fn employees(&self) -> anyhow::Result<()> {
        let password_hash = hash_password(SEED_PASSWORD)?;
        let people = [
            Person {
                id: ALICE,
                number: "EMP-001",
                first: "Alice",
                last: "Smith",
                national_id: "NAT-ALICE-001",
                email: "alice@company.com",
                hired: date(2020, 1, 1)?,
                contract: "FULL_TIME_CONTRACT",
                work: "FULL_TIME",
                position: HR_MANAGER_POS,
                department: HR_DEPT,
                roles: &["HR Manager", "System Admin"],
            },
            Person {
                id: BOB,
                number: "EMP-002",
                first: "Bob",
                last: "Jones",
                national_id: "NAT-BOB-002",
                email: "bob@company.com",
                hired: date(2021, 5, 15)?,
                contract: "FULL_TIME_CONTRACT",
                work: "FULL_TIME",
                position: SOFTWARE_ENG_POS,
                department: ENG_DEPT,
                roles: &["Payroll Specialist"],
            },
            Person {
                id: CHARLIE,
                number: "EMP-003",
                first: "Charlie",
                last: "Brown",
                national_id: "NAT-CHARLIE-003",
                email: "charlie@company.com",
                hired: date(2022, 3, 10)?,
                contract: "PART_TIME_CONTRACT",
                work: "PART_TIME",
                position: SALES_REP_POS,
                department: SALES_DEPT,
                roles: &[],
            },
        ];

        for person in people {
            if employee_profiles::Entity::find_by_id(person.id)
                .one(&self.db)
                .await?
                .is_some()
            {
                println!("  Employee {} already exists, skipping...", person.email);
                continue;
            }

            employee_profiles::ActiveModel {
                id: Set(person.id),
                employee_number: Set(person.number.to_string()),
                first_name: Set(person.first.to_string()),
                last_name: Set(person.last.to_string()),
                national_id: Set(person.national_id.to_string()),
                work_email: Set(person.email.to_string()),
                hire_date: Set(person.hired),
                status: Set("ACTIVE".to_string()),
                contract_type: Set(person.contract.to_string()),
                work_type: Set(person.work.to_string()),
                gender: Set(None),
                marital_status: Set(None),
                primary_position_id: Set(Some(person.position)),
                primary_department_id: Set(Some(person.department)),
                password_hash: Set(Some(password_hash.clone())),
                is_temporary_password: Set(false),
                created_at: Set(self.now),
                updated_at: Set(self.now),
            }
            .insert(&self.db)
            .await?;

            position_assignments::ActiveModel {
                id: Set(Uuid::now_v7()),
                employee_profile_id: Set(person.id),
                position_id: Set(person.position),
                department_id: Set(person.department),
                start_date: Set(person.hired),
                end_date: Set(None),
                created_at: Set(self.now),
            }
            .insert(&self.db)
            .await?;

            if !person.roles.is_empty() {
                employee_system_roles::ActiveModel {
                    id: Set(Uuid::now_v7()),
                    employee_profile_id: Set(person.id),
                    roles: Set(person.roles.iter().map(ToString::to_string).collect()),
                    is_active: Set(true),
                    created_at: Set(self.now),
                    updated_at: Set(self.now),
                }
                .insert(&self.db)
                .await?;
            }
            println!("  Created employee: {} ({:?})", person.email, person.roles);
        }
        Ok(())
    }

    async fn time_management(&self) -> anyhow::Result<()> {
        if shift_types::Entity::find_by_id(MORNING_SHIFT_TYPE)
            .one(&self.db)
            .await?
            .is_some()
        {
            println!("  Time management data already exists, skipping...");
            return Ok(());
        }

        shift_types::ActiveModel {
            id: Set(MORNING_SHIFT_TYPE),
            name: Set("Morning Shift".to_string()),
            active: Set(true),
            created_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        shifts::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set("Standard Morning (9-5)".to_string()),
            shift_type_id: Set(MORNING_SHIFT_TYPE),
            start_time: Set(time(9, 0)?),
            end_time: Set(time(17, 0)?),
            punch_policy: Set("FIRST_LAST".to_string()),
            grace_in_minutes: Set(15),
            grace_out_minutes: Set(15),
            requires_approval_for_overtime: Set(true),
            active: Set(true),
            created_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        holidays::ActiveModel {
            id: Set(Uuid::now_v7()),
            holiday_type: Set("NATIONAL".to_string()),
            start_date: Set(date(2026, 1, 1)?),
            end_date: Set(None),
            name: Set("New Year's Day".to_string()),
            active: Set(true),
            created_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        lateness_rules::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set("Standard Lateness".to_string()),
            description: Set(Some("Deduction after the grace period".to_string())),
            grace_period_minutes: Set(15),
            deduction_per_minute: Set(Decimal::new(50, 2)),
            active: Set(true),
            created_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        overtime_rules::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set("Standard Overtime".to_string()),
            description: Set(None),
            active: Set(true),
            approved: Set(true),
            created_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        schedule_rules::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set("Standard Week".to_string()),
            pattern: Set("Mon-Fri".to_string()),
            active: Set(true),
            created_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        println!("  Created shift type, shift, holiday, lateness, overtime and schedule rules");
        Ok(())
    }

    async fn performance(&self) -> anyhow::Result<()> {
        if appraisal_templates::Entity::find_by_id(ANNUAL_TEMPLATE)
            .one(&self.db)
            .await?
            .is_some()
        {
            println!("  Appraisal templates already exist, skipping...");
            return Ok(());
        }

        appraisal_templates::ActiveModel {
            id: Set(ANNUAL_TEMPLATE),
            name: Set("Annual Review".to_string()),
            description: Set(Some("Yearly performance review".to_string())),
            template_type: Set("ANNUAL".to_string()),
            rating_scale: Set(json!({"type": "FIVE_POINT", "min": 1, "max": 5})),
            sections: Set(json!([
                {"title": "Goals", "weight": 60},
                {"title": "Competencies", "weight": 40}
            ])),
            is_active: Set(true),
            created_at: Set(self.now),
            updated_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        appraisal_cycles::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set("2026 Annual Review Cycle".to_string()),
            description: Set(Some("Performance review for the year 2026".to_string())),
            cycle_type: Set("ANNUAL".to_string()),
            start_date: Set(date(2026, 1, 1)?),
            end_date: Set(date(2026, 12, 31)?),
            manager_due_date: Set(None),
            employee_acknowledgement_due_date: Set(None),
            status: Set("ACTIVE".to_string()),
            template_assignments: Set(json!([{
                "templateId": ANNUAL_TEMPLATE,
                "departmentIds": [HR_DEPT, ENG_DEPT, SALES_DEPT]
            }])),
            created_at: Set(self.now),
            updated_at: Set(self.now),
        }
        .insert(&self.db)
        .await?;

        println!("  Created appraisal template and cycle: Annual Review");
        Ok(())
    }

    async fn payroll_configuration(&self) -> anyhow::Result<()> {
        let grades = ConfigRepository::<pay_grades::Entity>::new(self.db.clone());
        if !grades.list().await?.is_empty() {
            println!("  Payroll configuration already exists, skipping...");
            return Ok(());
        }
        let created_by = Some(ALICE.to_string());

        ConfigRepository::<pay_types::Entity>::new(self.db.clone())
            .create(CreatePayTypeInput {
                pay_type: "Monthly".to_string(),
                amount: Decimal::new(6000, 0),
                created_by: created_by.clone(),
            })
            .await?;

        grades
            .create(CreatePayGradeInput {
                grade: "Junior".to_string(),
                base_salary: Decimal::new(8000, 0),
                gross_salary: Decimal::new(10000, 0),
                created_by: created_by.clone(),
            })
            .await?;

        ConfigRepository::<allowances::Entity>::new(self.db.clone())
            .create(CreateAllowanceInput {
                name: "Housing".to_string(),
                description: Some("Monthly housing support".to_string()),
                amount: Decimal::new(1500, 0),
                taxable: true,
                created_by: created_by.clone(),
            })
            .await?;

        ConfigRepository::<insurance_brackets::Entity>::new(self.db.clone())
            .create(CreateInsuranceBracketInput {
                name: "Social Insurance".to_string(),
                min_salary: Decimal::new(2000, 0),
                max_salary: Decimal::new(12600, 0),
                employee_rate: Decimal::new(11, 0),
                employer_rate: Decimal::new(1875, 2),
                created_by: created_by.clone(),
            })
            .await?;

        ConfigRepository::<tax_rules::Entity>::new(self.db.clone())
            .create(CreateTaxRuleInput {
                code: Some("TAX-01".to_string()),
                name: "First bracket".to_string(),
                bracket_from: Decimal::ZERO,
                bracket_to: Some(Decimal::new(15000, 0)),
                rate: Decimal::new(10, 0),
                description: None,
                created_by: created_by.clone(),
            })
            .await?;

        ConfigRepository::<benefits::Entity>::new(self.db.clone())
            .create(CreateBenefitInput {
                name: "End of service gratuity".to_string(),
                amount: Decimal::new(10000, 0),
                terms: Some("After five years of service".to_string()),
                created_by: created_by.clone(),
            })
            .await?;

        ConfigRepository::<signing_bonuses::Entity>::new(self.db.clone())
            .create(CreateSigningBonusInput {
                position_name: "Software Engineer".to_string(),
                amount: Decimal::new(5000, 0),
                created_by: created_by.clone(),
            })
            .await?;

        ConfigRepository::<payroll_policies::Entity>::new(self.db.clone())
            .create(CreatePolicyInput {
                policy_name: "Lateness penalty".to_string(),
                policy_type: PolicyType::Misconduct,
                description: "Deduction applied for repeated lateness".to_string(),
                effective_date: date(2026, 1, 1)?,
                applicability: Applicability::AllEmployees,
                rule_definition: RuleDefinition {
                    percentage: Decimal::new(5, 0),
                    fixed_amount: Decimal::ZERO,
                    threshold_amount: Decimal::new(3, 0),
                },
                created_by,
            })
            .await?;

        println!("  Created 8 draft configuration records");
        Ok(())
    }

    async fn company_settings(&self) -> anyhow::Result<()> {
        let repo = CompanySettingsRepository::new(self.db.clone());
        if !repo.get().await?.is_empty() {
            println!("  Company settings already exist, skipping...");
            return Ok(());
        }

        repo.update(&json!({
            "payDate": 25,
            "timeZone": "Africa/Cairo",
            "currency": "EGP"
        }))
        .await?;
        println!("  Created company settings");
        Ok(())
    }
}

struct Person {
    id: Uuid,
    number: &'static str,
    first: &'static str,
    last: &'static str,
    national_id: &'static str,
    email: &'static str,
    hired: NaiveDate,
    contract: &'static str,
    work: &'static str,
    position: Uuid,
    department: Uuid,
    roles: &'static [&'static str],
}
