/// Radio capabilities decoded from a catalog connectivity token.
///
/// Tokens are underscore-joined capability names such as
/// `"NFC_GPS_WIFI_3G_LTE"`. Each flag is an independent substring test, so
/// token order does not matter and an absent name means "not supported".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Connectivity {
    pub nfc: bool,
    pub gps: bool,
    pub wifi: bool,
    pub three_g: bool,
    pub lte: bool,
}

impl Connectivity {
    pub fn from_token(token: &str) -> Self {
        Self {
            nfc: token.contains("NFC"),
            gps: token.contains("GPS"),
            wifi: token.contains("WIFI"),
            three_g: token.contains("3G"),
            lte: token.contains("LTE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_token_sets_every_flag() {
        let c = Connectivity::from_token("NFC_GPS_WIFI_3G_LTE");
        assert_eq!(
            c,
            Connectivity {
                nfc: true,
                gps: true,
                wifi: true,
                three_g: true,
                lte: true,
            }
        );
    }

    #[test]
    fn flags_are_independent() {
        let c = Connectivity::from_token("WIFI_3G_LTE");
        assert!(!c.nfc);
        assert!(!c.gps);
        assert!(c.wifi);
        assert!(c.three_g);
        assert!(c.lte);

        let c = Connectivity::from_token("GPS_3G_LTE");
        assert!(!c.wifi);
        assert!(c.gps);
    }

    #[test]
    fn empty_token_means_nothing() {
        assert_eq!(Connectivity::from_token(""), Connectivity::default());
    }
}
