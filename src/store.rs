//! In-memory session store — snapshot state, query projections, booking.
//!
//! `AppState` is a plain value: the five seeded collections plus the
//! booking side effects (notifications, booked-slot set). `Store` owns the
//! current snapshot and the session clock. Queries hand out owned copies;
//! the two mutating actions (`book_appointment`, `add_notification`) and
//! `reset` build a whole new state and swap it in, so a snapshot observed
//! by a caller is never edited underneath it.

use std::collections::HashSet;

use chrono::{Local, Months, NaiveDateTime};

use crate::error::StoreError;
use crate::models::{
    Appointment, AppointmentStatus, AvailableSlot, Commitment, CommitmentStatus,
    NotificationEvent, Patient, Referral, ReferralStatus, SearchMode, ServiceCategory,
};
use crate::notifications::booking_notifications;
use crate::seed;

// ─── State snapshot ───────────────────────────────────────────────────────────

/// One immutable-by-convention snapshot of the session.
#[derive(Debug, Clone)]
pub struct AppState {
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
    pub referrals: Vec<Referral>,
    pub commitments: Vec<Commitment>,
    pub available_slots: Vec<AvailableSlot>,
    pub notifications: Vec<NotificationEvent>,
    pub booked_slot_ids: HashSet<String>,
}

impl AppState {
    /// Fresh seed data relative to `now`; no bookings, no notifications.
    pub fn seeded(now: NaiveDateTime) -> Self {
        Self {
            patients: seed::patients(),
            appointments: seed::initial_appointments(now),
            referrals: seed::initial_referrals(now),
            commitments: seed::initial_commitments(now),
            available_slots: seed::available_slots(now),
            notifications: Vec::new(),
            booked_slot_ids: HashSet::new(),
        }
    }

    /// Referential integrity over the child collections: every appointment,
    /// referral, and commitment must point at a present patient and carry
    /// that patient's family id.
    pub fn validate(&self) -> Result<(), StoreError> {
        let family_of = |patient_id: &str| {
            self.patients
                .iter()
                .find(|p| p.id == patient_id)
                .map(|p| p.family_id.as_str())
        };

        let check = |kind: &str, id: &str, patient_id: &str, family_id: &str| {
            match family_of(patient_id) {
                None => Err(StoreError::SeedIntegrity(format!(
                    "{kind} {id} references unknown patient {patient_id}"
                ))),
                Some(family) if family != family_id => Err(StoreError::SeedIntegrity(format!(
                    "{kind} {id} carries family {family_id}, patient belongs to {family}"
                ))),
                Some(_) => Ok(()),
            }
        };

        for a in &self.appointments {
            check("appointment", &a.id, &a.patient_id, &a.family_id)?;
        }
        for r in &self.referrals {
            check("referral", &r.id, &r.patient_id, &r.family_id)?;
        }
        for c in &self.commitments {
            check("commitment", &c.id, &c.patient_id, &c.family_id)?;
        }
        Ok(())
    }
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// The session store: one snapshot, one logical writer.
///
/// `now` and the six-month history threshold are evaluated once at
/// construction, so every future/past partition in a session agrees on the
/// same instant.
pub struct Store {
    state: AppState,
    now: NaiveDateTime,
    six_months_ago: NaiveDateTime,
}

impl Store {
    /// Seeds a store against the wall clock.
    pub fn new() -> Self {
        Self::with_now(Local::now().naive_local())
    }

    /// Seeds a store against a fixed clock (demos, tests).
    pub fn with_now(now: NaiveDateTime) -> Self {
        let state = AppState::seeded(now);
        state
            .validate()
            .expect("mock dataset is internally consistent");
        let six_months_ago = now
            .checked_sub_months(Months::new(6))
            .expect("representable history threshold");
        Self {
            state,
            now,
            six_months_ago,
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The instant all future/past partitions are evaluated against.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn notifications(&self) -> &[NotificationEvent] {
        &self.state.notifications
    }

    // ─── Patients ─────────────────────────────────────────────────────────

    pub fn get_patient(&self, id: &str) -> Option<Patient> {
        self.state.patients.iter().find(|p| p.id == id).cloned()
    }

    /// All patients sharing the family id, in insertion order.
    pub fn get_family_members(&self, family_id: &str) -> Vec<Patient> {
        self.state
            .patients
            .iter()
            .filter(|p| p.family_id == family_id)
            .cloned()
            .collect()
    }

    // ─── Appointments ─────────────────────────────────────────────────────

    /// Scheduled appointments from `now` on, soonest first.
    pub fn get_future_appointments(&self, patient_id: &str) -> Vec<Appointment> {
        self.future_matching(|a| a.patient_id == patient_id)
    }

    pub fn get_family_future_appointments(&self, family_id: &str) -> Vec<Appointment> {
        self.future_matching(|a| a.family_id == family_id)
    }

    /// History within the rolling six-month window, newest first.
    /// Deliberately status-blind: a canceled visit still shows in history.
    pub fn get_past_appointments(&self, patient_id: &str) -> Vec<Appointment> {
        self.past_matching(|a| a.patient_id == patient_id)
    }

    pub fn get_family_past_appointments(&self, family_id: &str) -> Vec<Appointment> {
        self.past_matching(|a| a.family_id == family_id)
    }

    /// Earliest upcoming Scheduled appointment in the category.
    pub fn get_next_appointment_by_category(
        &self,
        patient_id: &str,
        category: ServiceCategory,
    ) -> Option<Appointment> {
        self.future_matching(|a| a.patient_id == patient_id && a.service_category == category)
            .into_iter()
            .next()
    }

    /// Most recent appointment in the category within the history window.
    pub fn get_last_appointment_by_category(
        &self,
        patient_id: &str,
        category: ServiceCategory,
    ) -> Option<Appointment> {
        self.past_matching(|a| a.patient_id == patient_id && a.service_category == category)
            .into_iter()
            .next()
    }

    /// Same projection as [`get_future_appointments`]; the booking screen
    /// and the patient dashboard arrived at the accessor independently and
    /// both names are part of the store surface.
    ///
    /// [`get_future_appointments`]: Store::get_future_appointments
    pub fn get_all_future_appointments(&self, patient_id: &str) -> Vec<Appointment> {
        self.get_future_appointments(patient_id)
    }

    fn future_matching(&self, matches: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        let mut out: Vec<Appointment> = self
            .state
            .appointments
            .iter()
            .filter(|a| matches(a) && a.start >= self.now && a.status == AppointmentStatus::Scheduled)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.start.cmp(&b.start));
        out
    }

    fn past_matching(&self, matches: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        let mut out: Vec<Appointment> = self
            .state
            .appointments
            .iter()
            .filter(|a| matches(a) && a.start < self.now && a.start >= self.six_months_ago)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.start.cmp(&a.start));
        out
    }

    // ─── Referrals ────────────────────────────────────────────────────────

    /// Referrals issued within the last six months, newest first.
    pub fn get_referrals(&self, patient_id: &str) -> Vec<Referral> {
        self.referrals_matching(|r| r.patient_id == patient_id, Some(self.six_months_ago))
    }

    pub fn get_family_referrals(&self, family_id: &str) -> Vec<Referral> {
        self.referrals_matching(|r| r.family_id == family_id, Some(self.six_months_ago))
    }

    /// Unbounded referral history, newest first.
    pub fn get_all_patient_referrals(&self, patient_id: &str) -> Vec<Referral> {
        self.referrals_matching(|r| r.patient_id == patient_id, None)
    }

    /// Windowed referrals still open for booking.
    pub fn get_open_referrals(&self, patient_id: &str) -> Vec<Referral> {
        self.get_referrals(patient_id)
            .into_iter()
            .filter(|r| r.status == ReferralStatus::Open)
            .collect()
    }

    fn referrals_matching(
        &self,
        matches: impl Fn(&Referral) -> bool,
        created_after: Option<NaiveDateTime>,
    ) -> Vec<Referral> {
        let mut out: Vec<Referral> = self
            .state
            .referrals
            .iter()
            .filter(|r| matches(r) && created_after.map_or(true, |t| r.created >= t))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created.cmp(&a.created));
        out
    }

    // ─── Commitments ──────────────────────────────────────────────────────

    /// Commitments recorded within the last six months, newest first.
    pub fn get_commitments(&self, patient_id: &str) -> Vec<Commitment> {
        self.commitments_matching(|c| c.patient_id == patient_id)
    }

    pub fn get_family_commitments(&self, family_id: &str) -> Vec<Commitment> {
        self.commitments_matching(|c| c.family_id == family_id)
    }

    /// Windowed commitments still active.
    pub fn get_active_commitments(&self, patient_id: &str) -> Vec<Commitment> {
        self.get_commitments(patient_id)
            .into_iter()
            .filter(|c| c.status == CommitmentStatus::Active)
            .collect()
    }

    fn commitments_matching(&self, matches: impl Fn(&Commitment) -> bool) -> Vec<Commitment> {
        let mut out: Vec<Commitment> = self
            .state
            .commitments
            .iter()
            .filter(|c| matches(c) && c.created >= self.six_months_ago)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created.cmp(&a.created));
        out
    }

    // ─── Slot search ──────────────────────────────────────────────────────

    /// Filters the unbooked slot pool, in seed order.
    ///
    /// An empty or whitespace-only query returns the full pool in every
    /// mode. `Code` substring-matches the treatment code, `List` requires
    /// the service name to equal the query exactly (picklist flow), and
    /// `Text` substring-matches across service name, treatment code,
    /// clinic name, clinic city, and provider name, case-insensitively.
    pub fn search_slots(&self, query: &str, mode: SearchMode) -> Vec<AvailableSlot> {
        let available = self
            .state
            .available_slots
            .iter()
            .filter(|s| !self.state.booked_slot_ids.contains(&s.id));

        let trimmed = query.trim();
        if trimmed.is_empty() {
            return available.cloned().collect();
        }
        let q = trimmed.to_lowercase();

        match mode {
            SearchMode::Code => available
                .filter(|s| s.treatment_code.to_lowercase().contains(&q))
                .cloned()
                .collect(),
            SearchMode::List => available.filter(|s| s.service_name == query).cloned().collect(),
            SearchMode::Text => available
                .filter(|s| {
                    s.service_name.to_lowercase().contains(&q)
                        || s.treatment_code.to_lowercase().contains(&q)
                        || s.clinic.name.to_lowercase().contains(&q)
                        || s.clinic.city.to_lowercase().contains(&q)
                        || s.provider_name.to_lowercase().contains(&q)
                })
                .cloned()
                .collect(),
        }
    }

    // ─── Mutations ────────────────────────────────────────────────────────

    /// Books a quick-flow slot for the patient.
    ///
    /// Appends a Scheduled ultrasound appointment, consumes the slot id,
    /// and records the four side-channel notifications. A booking for an
    /// unknown patient id is dropped without surfacing an error — the
    /// portal never reaches this path with an unresolved patient.
    pub fn book_appointment(&mut self, patient_id: &str, slot: &AvailableSlot) {
        let Some(patient) = self.state.patients.iter().find(|p| p.id == patient_id).cloned()
        else {
            tracing::warn!(patient_id, slot_id = %slot.id, "booking for unknown patient dropped");
            return;
        };

        let booked_at = Local::now().naive_local();
        let appointment = Appointment {
            id: format!("APT-{}", booked_at.and_utc().timestamp_millis()),
            patient_id: patient.id.clone(),
            family_id: patient.family_id.clone(),
            // The quick-flow path only books ultrasound exams.
            service_category: ServiceCategory::Ultrasound,
            service_name: slot.service_name.clone(),
            clinic: slot.clinic.clone(),
            provider_name: slot.provider_name.clone(),
            start: slot.start,
            status: AppointmentStatus::Scheduled,
        };
        let events = booking_notifications(&patient, slot, &appointment.id, booked_at);

        tracing::info!(
            patient_id,
            slot_id = %slot.id,
            appointment_id = %appointment.id,
            "slot booked"
        );

        let mut next = self.state.clone();
        next.appointments.push(appointment);
        next.booked_slot_ids.insert(slot.id.clone());
        next.notifications.extend(events);
        self.state = next;
    }

    /// Appends a notification outside the booking flow (legacy-path pages
    /// record their own simulated side effects).
    pub fn add_notification(&mut self, notification: NotificationEvent) {
        let mut next = self.state.clone();
        next.notifications.push(notification);
        self.state = next;
    }

    /// Discards every mutation and reseeds against the construction clock.
    pub fn reset(&mut self) {
        tracing::info!("store reset to seed data");
        self.state = AppState::seeded(self.now);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
