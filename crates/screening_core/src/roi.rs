/// Per-resume price of the hosted plan the calculator compares against.
pub const SERVICE_PRICE_PER_RESUME: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoiInputs {
    pub monthly_resumes: u32,
    pub minutes_per_resume: u32,
    pub hourly_rate: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            monthly_resumes: 1000,
            minutes_per_resume: 15,
            hourly_rate: 75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiReport {
    pub manual_cost: f64,
    pub service_cost: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Savings relative to the service cost; 0 when nothing is screened.
    pub roi_percent: f64,
}

impl RoiInputs {
    pub fn report(&self) -> RoiReport {
        let resumes = f64::from(self.monthly_resumes);
        let manual_cost =
            resumes * (f64::from(self.minutes_per_resume) / 60.0) * f64::from(self.hourly_rate);
        let service_cost = resumes * SERVICE_PRICE_PER_RESUME;
        let monthly_savings = manual_cost - service_cost;
        let roi_percent = if service_cost > 0.0 {
            monthly_savings / service_cost * 100.0
        } else {
            0.0
        };

        RoiReport {
            manual_cost,
            service_cost,
            monthly_savings,
            annual_savings: monthly_savings * 12.0,
            roi_percent,
        }
    }
}
