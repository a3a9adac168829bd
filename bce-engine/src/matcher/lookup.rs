//! Table lookup: by item number, or by rule under either convention.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{BookingCode, VendorCode};
use crate::fare::{RULE_ZERO, TravelSeg};
use crate::source::{RuleKey, SequenceSource, SourceError};

use super::{BceMatcher, Convention};

impl BceMatcher<'_> {
    /// Process the table item named by the fare's booking code table item
    /// number. Returns true if any booking code was collected.
    pub fn booking_code_exception_for_item(
        &mut self,
        source: &dyn SequenceSource,
        booking_codes: &mut Vec<BookingCode>,
    ) -> Result<bool, SourceError> {
        if self.is_rb_secondary() {
            booking_codes.clear();
        }

        let vendor = self.fare.vendor;
        let item_no = self.fare.booking_code_tbl_item_no;
        let sequences = source.sequences_for_item(vendor, item_no)?;
        if sequences.is_empty() {
            debug!(%vendor, item_no, "no booking code exception item");
            return Ok(false);
        }

        debug!(%vendor, item_no, sequences = sequences.len(), "processing item");
        self.process_sequences(&sequences, booking_codes, Convention::Two, vendor);
        Ok(!booking_codes.is_empty())
    }

    /// Process the rule-level table for the fare, falling back to
    /// carrier-level data where the rule files none.
    ///
    /// Under convention 2 the result is always true. Under convention 1 it
    /// is true if a table was found.
    pub fn booking_code_exception_for_rule(
        &mut self,
        source: &dyn SequenceSource,
        vendor: VendorCode,
        sector: &TravelSeg,
        convention: Convention,
        booking_codes: &mut Vec<BookingCode>,
    ) -> Result<bool, SourceError> {
        let date = sector.departure;
        let fare_vendor = self.fare.vendor;
        let fare_carrier = self.fare.carrier;
        let fare_tariff = self.fare.rule.tariff;
        let is_smf = !fare_vendor.is_public();

        let mut is_fbr_smf = false;
        let (base_carrier, base_rule) = match &self.fare.fare_by_rule {
            Some(fbr) if !fbr.specified => {
                is_fbr_smf = is_smf && fbr.prime_sector;
                match &fbr.base_fare {
                    Some(base) => (base.carrier, base.rule.clone()),
                    None => (fare_carrier, self.fare.rule.clone()),
                }
            }
            _ => (fare_carrier, self.fare.rule.clone()),
        };

        let mut carrier = self.fare.market.governing_carrier;
        if self.is_rb_secondary() {
            booking_codes.clear();
            if let Some(rb_carrier) = self
                .rb()
                .and_then(|rb| rb.air_seg.as_ref())
                .and_then(|seg| seg.carrier)
            {
                carrier = rb_carrier;
            }
        }

        let carrier_level_smf = RuleKey::new(
            fare_vendor,
            fare_carrier,
            fare_tariff,
            RULE_ZERO,
            Convention::Two,
        );

        match convention {
            Convention::Two => {
                let key = if is_fbr_smf {
                    RuleKey::new(
                        fare_vendor,
                        fare_carrier,
                        self.fare.rule.tariff,
                        self.fare.rule.rule.clone(),
                        Convention::Two,
                    )
                } else {
                    RuleKey::new(
                        vendor,
                        base_carrier,
                        base_rule.tariff,
                        base_rule.rule,
                        Convention::Two,
                    )
                };
                self.process_rule(source, &key, date, booking_codes, false)?;

                let foreign = carrier != fare_carrier || self.fare.is_industry();
                if booking_codes.is_empty() && self.is_rb_secondary() && foreign {
                    let fallback = if is_smf || is_fbr_smf {
                        carrier_level_smf
                    } else {
                        let vendor = if vendor == VendorCode::SITA {
                            VendorCode::ATPCO
                        } else {
                            vendor
                        };
                        RuleKey::new(vendor, carrier, 0, RULE_ZERO, Convention::One)
                    };
                    self.process_rule(source, &fallback, date, booking_codes, true)?;
                }
                Ok(true)
            }
            Convention::One => {
                let key = if is_smf {
                    carrier_level_smf
                } else {
                    RuleKey::new(vendor, carrier, 0, RULE_ZERO, Convention::One)
                };
                self.process_rule(source, &key, date, booking_codes, true)
            }
        }
    }

    /// Look up and process one rule-level table. Returns true if it exists.
    fn process_rule(
        &mut self,
        source: &dyn SequenceSource,
        key: &RuleKey,
        date: NaiveDate,
        booking_codes: &mut Vec<BookingCode>,
        clear: bool,
    ) -> Result<bool, SourceError> {
        let sequences = source.sequences_for_rule(key, date)?;
        debug!(
            vendor = %key.vendor,
            carrier = %key.carrier,
            tariff = key.tariff,
            rule = key.rule.as_str(),
            convention = %key.convention,
            sequences = sequences.len(),
            "rule lookup"
        );
        if sequences.is_empty() {
            return Ok(false);
        }
        if clear {
            booking_codes.clear();
        }
        self.process_sequences(&sequences, booking_codes, key.convention, key.vendor);
        Ok(true)
    }
}
