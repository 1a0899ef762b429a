pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{candidate_builder::*, table_builder::*};

pub mod candidate_builder {

    use super::*;
    use crate::{geo::*, geocode::*};

    #[derive(Debug)]
    pub struct CandidateBuild {
        candidate: Candidate,
    }

    impl CandidateBuild {
        pub fn formatted_address(mut self, x: &str) -> Self {
            self.candidate.formatted_address = x.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.candidate.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn component(mut self, long_name: &str, types: &[&str]) -> Self {
            self.candidate.address_components.push(AddressComponent {
                long_name: long_name.into(),
                short_name: None,
                types: types.iter().map(|t| t.to_string()).collect(),
            });
            self
        }
        pub fn finish(self) -> Candidate {
            self.candidate
        }
    }

    impl Builder for Candidate {
        type Build = CandidateBuild;
        fn build() -> Self::Build {
            CandidateBuild {
                candidate: Candidate::default(),
            }
        }
    }

    #[test]
    fn route_detection() {
        assert!(!Candidate::build().finish().has_route());
        assert!(!Candidate::build()
            .component("Brooklyn", &["political"])
            .finish()
            .has_route());
        assert!(Candidate::build()
            .component("Jay Street", &["route"])
            .finish()
            .has_route());
    }
}

pub mod table_builder {

    use super::*;
    use crate::table::*;

    #[derive(Debug)]
    pub struct TableBuild {
        table: Table,
    }

    impl TableBuild {
        pub fn headers(mut self, headers: &[&str]) -> Self {
            self.table.headers = headers.iter().map(|h| h.to_string()).collect();
            self
        }
        pub fn row(mut self, fields: &[&str]) -> Self {
            self.table
                .rows
                .push(fields.iter().map(|f| f.to_string()).collect());
            self
        }
        pub fn finish(self) -> Table {
            self.table
        }
    }

    impl Builder for Table {
        type Build = TableBuild;
        fn build() -> Self::Build {
            TableBuild {
                table: Table::default(),
            }
        }
    }
}
