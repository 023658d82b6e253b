use serde::{Deserialize, Serialize};

/// Base of the WhatsApp deep link built from a supplier's phone number.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Number of symbols in the rating scale.
pub const RATING_SCALE: usize = 5;

/// An energy-supply offer ("fornecedor") as exchanged with the remote API.
///
/// Field names are English in Rust and Portuguese on the wire. The same shape
/// is produced by the registration form and returned by the consult endpoint.
/// `name` doubles as the list key in the carousel; it is not guaranteed to be
/// unique.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "nome")]
    pub name: String,
    /// Either a URL (absolute, relative to the site root, or a data URI) or a
    /// bare asset filename resolved against the asset base.
    #[serde(default)]
    pub logo: String,
    #[serde(rename = "estado", default)]
    pub state: String,
    #[serde(rename = "custo_por_kwh")]
    pub cost_per_kwh: f64,
    #[serde(rename = "limite_minimo_kwh")]
    pub min_kwh_threshold: f64,
    #[serde(rename = "numero_total_clientes", default)]
    pub total_customers: f64,
    #[serde(rename = "avaliacao_media", default)]
    pub average_rating: f64,
    #[serde(rename = "telefone", default)]
    pub phone: String,
}

impl Supplier {
    /// Builds the `https://wa.me/<digits>` contact link.
    ///
    /// Only ASCII digits of `phone` are kept, so the masked form typed in the
    /// registration form ("(99) 99999-9999") still yields a valid link.
    /// Returns `None` when the phone carries no digit at all.
    pub fn contact_link(&self) -> Option<String> {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            None
        } else {
            Some(format!("{WHATSAPP_BASE_URL}{digits}"))
        }
    }

    /// Filled/hollow state of each symbol of the rating scale.
    ///
    /// Position `i` (1-based) is filled when `i <= round(average_rating)`.
    pub fn star_scale(&self) -> [bool; RATING_SCALE] {
        let rounded = if self.average_rating.is_finite() {
            self.average_rating.round()
        } else {
            0.0
        };
        let mut stars = [false; RATING_SCALE];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = (i + 1) as f64 <= rounded;
        }
        stars
    }

    /// Rating shown above the stars, with one decimal.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }

    /// Price line shown on each card.
    pub fn cost_label(&self) -> String {
        format!("R${:.2}/kWh", self.cost_per_kwh)
    }

    /// Minimum consumption line shown on each card.
    pub fn min_kwh_label(&self) -> String {
        format!("Limite min:{}/kWh", self.min_kwh_threshold)
    }

    /// Suppliers are identified by `name` alone.
    pub fn has_same_key(&self, other: &Supplier) -> bool {
        self.name == other.name
    }

    /// Customer count as a non-negative integer, for display.
    pub fn customer_count(&self) -> u64 {
        if self.total_customers.is_finite() && self.total_customers > 0.0 {
            self.total_customers.round() as u64
        } else {
            0
        }
    }
}

/// List key of the supplier at `position` in `suppliers`.
///
/// The name is the key; when another supplier of the list shares it, the
/// position is appended so sibling keys stay distinct.
pub fn card_key(suppliers: &[Supplier], position: usize) -> String {
    let supplier = &suppliers[position];
    let shared = suppliers
        .iter()
        .enumerate()
        .any(|(i, other)| i != position && supplier.has_same_key(other));
    if shared {
        format!("{}-{}", supplier.name, position)
    } else {
        supplier.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_phone(phone: &str) -> Supplier {
        Supplier {
            name: "Acme".to_string(),
            phone: phone.to_string(),
            ..Default::default()
        }
    }

    fn with_rating(rating: f64) -> Supplier {
        Supplier {
            average_rating: rating,
            ..Default::default()
        }
    }

    #[test]
    fn contact_link_keeps_only_digits() {
        let supplier = with_phone("(11) 98765-4321");
        assert_eq!(
            supplier.contact_link().as_deref(),
            Some("https://wa.me/11987654321")
        );
    }

    #[test]
    fn contact_link_absent_without_phone() {
        assert_eq!(with_phone("").contact_link(), None);
        assert_eq!(with_phone(" - ").contact_link(), None);
    }

    #[test]
    fn star_scale_rounds_rating() {
        assert_eq!(with_rating(0.0).star_scale(), [false; 5]);
        assert_eq!(
            with_rating(3.4).star_scale(),
            [true, true, true, false, false]
        );
        assert_eq!(
            with_rating(3.5).star_scale(),
            [true, true, true, true, false]
        );
        assert_eq!(with_rating(5.0).star_scale(), [true; 5]);
        assert_eq!(with_rating(f64::NAN).star_scale(), [false; 5]);
    }

    #[test]
    fn labels_use_fixed_decimals() {
        let supplier = Supplier {
            cost_per_kwh: 0.5,
            min_kwh_threshold: 100.0,
            average_rating: 4.0,
            ..Default::default()
        };
        assert_eq!(supplier.rating_label(), "4.0");
        assert_eq!(supplier.cost_label(), "R$0.50/kWh");
        assert_eq!(supplier.min_kwh_label(), "Limite min:100/kWh");
    }

    #[test]
    fn deserializes_wire_names_without_phone() {
        let json = r#"{
            "nome": "Acme",
            "logo": "acme.png",
            "estado": "SP",
            "custo_por_kwh": 0.5,
            "limite_minimo_kwh": 100,
            "numero_total_clientes": 1200,
            "avaliacao_media": 4.2
        }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.name, "Acme");
        assert_eq!(supplier.state, "SP");
        assert_eq!(supplier.min_kwh_threshold, 100.0);
        assert_eq!(supplier.customer_count(), 1200);
        assert!(supplier.phone.is_empty());
    }

    #[test]
    fn serializes_wire_names() {
        let value = serde_json::to_value(with_phone("119")).unwrap();
        assert_eq!(value["nome"], "Acme");
        assert_eq!(value["telefone"], "119");
        assert!(value.get("name").is_none());
    }

    #[test]
    fn duplicate_names_get_positional_keys() {
        let bolt = Supplier {
            name: "Bolt".to_string(),
            ..Default::default()
        };
        let list = vec![with_phone(""), bolt, with_phone("1")];
        assert!(list[0].has_same_key(&list[2]));
        assert!(!list[0].has_same_key(&list[1]));
        assert_eq!(card_key(&list, 0), "Acme-0");
        assert_eq!(card_key(&list, 1), "Bolt");
        assert_eq!(card_key(&list, 2), "Acme-2");
    }
}
