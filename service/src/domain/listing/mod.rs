//! [`Listing`] definitions.

pub mod apartment;
pub mod house;
pub mod property;
pub mod purchase;
pub mod rental;

use std::{collections::BTreeMap, fmt};

use common::{define_kind, Kind};
use derive_more::{Display, Error, From};

use crate::form::{self, Input};

pub use self::{
    apartment::Apartment, house::House, property::Property,
    purchase::Purchase, rental::Rental,
};

/// Field map of a [`Listing`]: field name to its text value.
pub type Fields = BTreeMap<String, String>;

/// Real-estate listing managed by an agent.
///
/// Combines the [`Property`] attributes with exactly one [`Physical`] and
/// exactly one [`Transaction`] extension.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// [`Property`] attributes of this [`Listing`].
    pub property: Property,

    /// [`Physical`] extension of this [`Listing`].
    pub physical: Physical,

    /// [`Transaction`] extension of this [`Listing`].
    pub transaction: Transaction,
}

impl Listing {
    /// Assembles a new [`Listing`] from the provided [`Fields`], using `P` as
    /// its [`Physical`] extension and `T` as its [`Transaction`] extension.
    ///
    /// # Errors
    ///
    /// - [`FieldError::InvalidToken`] if an enumerated field holds an invalid
    ///   token;
    /// - [`FieldError::UnexpectedField`] if a field belongs to no section of
    ///   the assembled [`Listing`].
    pub fn assemble<P, T>(mut fields: Fields) -> Result<Self, FieldError>
    where
        P: Section + Into<Physical>,
        T: Section + Into<Transaction>,
    {
        let property = Property::take(&mut fields)?;
        let physical = P::take(&mut fields)?.into();
        let transaction = T::take(&mut fields)?.into();

        if let Some(name) = fields.into_keys().next() {
            return Err(FieldError::UnexpectedField(name));
        }

        Ok(Self {
            property,
            physical,
            transaction,
        })
    }

    /// Collects [`Fields`] of a [`Listing`] having `P` as its [`Physical`]
    /// extension and `T` as its [`Transaction`] extension.
    ///
    /// [`Property`] fields are asked first, then `P` fields, then `T` fields.
    ///
    /// # Errors
    ///
    /// If the provided [`Input`] fails.
    pub fn collect<P, T>(input: &mut dyn Input) -> Result<Fields, form::Error>
    where
        P: Section,
        T: Section,
    {
        let mut fields = Property::collect(input)?;
        fields.extend(P::collect(input)?);
        fields.extend(T::collect(input)?);
        Ok(fields)
    }

    /// Returns [`CompositeKind`] of this [`Listing`].
    #[must_use]
    pub fn kind(&self) -> CompositeKind {
        CompositeKind::of(self.physical_kind(), self.transaction_kind())
    }

    /// Returns [`PhysicalKind`] of this [`Listing`].
    #[must_use]
    pub fn physical_kind(&self) -> PhysicalKind {
        self.physical.kind()
    }

    /// Returns [`TransactionKind`] of this [`Listing`].
    #[must_use]
    pub fn transaction_kind(&self) -> TransactionKind {
        self.transaction.kind()
    }

    /// Returns the [`House`] extension of this [`Listing`], if it's a house.
    #[must_use]
    pub fn house(&self) -> Option<&House> {
        match &self.physical {
            Physical::House(h) => Some(h),
            Physical::Apartment(_) => None,
        }
    }

    /// Returns the [`Apartment`] extension of this [`Listing`], if it's an
    /// apartment.
    #[must_use]
    pub fn apartment(&self) -> Option<&Apartment> {
        match &self.physical {
            Physical::Apartment(a) => Some(a),
            Physical::House(_) => None,
        }
    }

    /// Returns the [`Purchase`] extension of this [`Listing`], if it's for
    /// sale.
    #[must_use]
    pub fn purchase(&self) -> Option<&Purchase> {
        match &self.transaction {
            Transaction::Purchase(p) => Some(p),
            Transaction::Rental(_) => None,
        }
    }

    /// Returns the [`Rental`] extension of this [`Listing`], if it's for
    /// rent.
    #[must_use]
    pub fn rental(&self) -> Option<&Rental> {
        match &self.transaction {
            Transaction::Rental(r) => Some(r),
            Transaction::Purchase(_) => None,
        }
    }

    /// Returns all the [`Fields`] of this [`Listing`].
    ///
    /// Uncollected enumerated fields are represented as empty strings.
    #[must_use]
    pub fn fields(&self) -> Fields {
        let mut fields = Fields::new();
        self.property.put(&mut fields);
        match &self.physical {
            Physical::House(h) => h.put(&mut fields),
            Physical::Apartment(a) => a.put(&mut fields),
        }
        match &self.transaction {
            Transaction::Purchase(p) => p.put(&mut fields),
            Transaction::Rental(r) => r.put(&mut fields),
        }
        fields
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind().title())?;
        self.property.render(f)?;
        match &self.physical {
            Physical::House(h) => h.render(f)?,
            Physical::Apartment(a) => a.render(f)?,
        }
        match &self.transaction {
            Transaction::Purchase(p) => p.render(f),
            Transaction::Rental(r) => r.render(f),
        }
    }
}

/// Physical extension of a [`Listing`].
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum Physical {
    /// [`House`] extension.
    House(House),

    /// [`Apartment`] extension.
    Apartment(Apartment),
}

impl Physical {
    /// Returns [`PhysicalKind`] of this [`Physical`] extension.
    #[must_use]
    pub fn kind(&self) -> PhysicalKind {
        match self {
            Self::House(_) => PhysicalKind::House,
            Self::Apartment(_) => PhysicalKind::Apartment,
        }
    }
}

/// Transaction extension of a [`Listing`].
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum Transaction {
    /// [`Purchase`] extension.
    Purchase(Purchase),

    /// [`Rental`] extension.
    Rental(Rental),
}

impl Transaction {
    /// Returns [`TransactionKind`] of this [`Transaction`] extension.
    #[must_use]
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Purchase(_) => TransactionKind::Purchase,
            Self::Rental(_) => TransactionKind::Rental,
        }
    }
}

define_kind! {
    #[doc = "Physical classification of a [`Listing`]."]
    enum PhysicalKind {
        #[doc = "A house."]
        House = "house",

        #[doc = "An apartment."]
        Apartment = "apartment",
    }
}

define_kind! {
    #[doc = "Transaction classification of a [`Listing`]."]
    enum TransactionKind {
        #[doc = "For sale."]
        Purchase = "purchase",

        #[doc = "For rent."]
        Rental = "rental",
    }
}

define_kind! {
    #[doc = "Composite classification of a [`Listing`]."]
    enum CompositeKind {
        #[doc = "A house for sale."]
        HousePurchase = "house purchase",

        #[doc = "A house for rent."]
        HouseRental = "house rental",

        #[doc = "An apartment for sale."]
        ApartmentPurchase = "apartment purchase",

        #[doc = "An apartment for rent."]
        ApartmentRental = "apartment rental",
    }
}

impl CompositeKind {
    /// Combines the provided [`PhysicalKind`] and [`TransactionKind`].
    #[must_use]
    pub const fn of(
        physical: PhysicalKind,
        transaction: TransactionKind,
    ) -> Self {
        use PhysicalKind as P;
        use TransactionKind as T;

        match (physical, transaction) {
            (P::House, T::Purchase) => Self::HousePurchase,
            (P::House, T::Rental) => Self::HouseRental,
            (P::Apartment, T::Purchase) => Self::ApartmentPurchase,
            (P::Apartment, T::Rental) => Self::ApartmentRental,
        }
    }

    /// Returns [`PhysicalKind`] of this [`CompositeKind`].
    #[must_use]
    pub fn physical(self) -> PhysicalKind {
        match self {
            Self::HousePurchase | Self::HouseRental => PhysicalKind::House,
            Self::ApartmentPurchase | Self::ApartmentRental => {
                PhysicalKind::Apartment
            }
        }
    }

    /// Returns [`TransactionKind`] of this [`CompositeKind`].
    #[must_use]
    pub fn transaction(self) -> TransactionKind {
        match self {
            Self::HousePurchase | Self::ApartmentPurchase => {
                TransactionKind::Purchase
            }
            Self::HouseRental | Self::ApartmentRental => {
                TransactionKind::Rental
            }
        }
    }

    /// Returns the title heading a rendered [`Listing`] of this
    /// [`CompositeKind`].
    #[must_use]
    pub fn title(self) -> String {
        self.token().to_ascii_uppercase()
    }
}

define_kind! {
    #[doc = "Yes or no answer."]
    enum YesNo {
        #[doc = "Yes."]
        Yes = "yes",

        #[doc = "No."]
        No = "no",
    }
}

/// Section of a [`Listing`] contributing its own fields.
pub trait Section: Sized {
    /// Collects [`Fields`] of this [`Section`] from the provided [`Input`].
    ///
    /// # Errors
    ///
    /// If the provided [`Input`] fails.
    fn collect(input: &mut dyn Input) -> Result<Fields, form::Error>;

    /// Takes fields of this [`Section`] out of the provided [`Fields`].
    ///
    /// Missing fields are left uncollected.
    ///
    /// # Errors
    ///
    /// With [`FieldError::InvalidToken`] if an enumerated field holds an
    /// invalid token.
    fn take(fields: &mut Fields) -> Result<Self, FieldError>;

    /// Puts all the fields of this [`Section`] into the provided [`Fields`].
    fn put(&self, fields: &mut Fields);

    /// Renders this [`Section`] under its header.
    ///
    /// # Errors
    ///
    /// If the [`fmt::Formatter`] fails.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Error of constructing a [`Listing`] from [`Fields`].
#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum FieldError {
    /// Enumerated field holds a value outside of its tokens.
    #[display("`{field}` field cannot be `{value}`")]
    InvalidToken {
        /// Name of the field.
        field: &'static str,

        /// Rejected value.
        value: String,
    },

    /// Field belongs to no section of the [`Listing`].
    #[display("unexpected `{_0}` field")]
    UnexpectedField(#[error(not(source))] String),
}

/// Takes the text field `name` out of the provided [`Fields`].
fn take_text(fields: &mut Fields, name: &str) -> String {
    fields.remove(name).unwrap_or_default()
}

/// Takes the enumerated field `name` out of the provided [`Fields`].
///
/// An empty value is treated as uncollected.
fn take_kind<K: Kind>(
    fields: &mut Fields,
    name: &'static str,
) -> Result<Option<K>, FieldError> {
    match fields.remove(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => K::from_token(&value).map(Some).map_err(|_| {
            FieldError::InvalidToken { field: name, value }
        }),
    }
}

/// Puts the text field `name` into the provided [`Fields`].
fn put_text(fields: &mut Fields, name: &str, value: &str) {
    drop(fields.insert(name.to_owned(), value.to_owned()));
}

/// Puts the enumerated field `name` into the provided [`Fields`].
fn put_kind<K: Kind>(fields: &mut Fields, name: &str, value: Option<K>) {
    put_text(fields, name, value.map_or("", K::token));
}

/// Displays an optional [`Kind`] value as its token, or nothing.
struct Token<K>(Option<K>);

impl<K: Kind> Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.map_or("", K::token))
    }
}

#[cfg(test)]
mod spec {
    use common::Kind as _;

    use super::{
        apartment::{Balcony, Laundry},
        house::Garage,
        Apartment, CompositeKind, FieldError, Fields, House, Listing,
        PhysicalKind, Property, Purchase, Rental, TransactionKind, YesNo,
    };

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn house_rental() -> Fields {
        fields(&[
            ("square_feet", "1800"),
            ("beds", "3"),
            ("baths", "2"),
            ("fenced", "yes"),
            ("garage", "detached"),
            ("num_stories", "2"),
            ("rent", "1200"),
            ("utilities", "150"),
            ("furnished", "no"),
        ])
    }

    #[test]
    fn assembles_house_rental() {
        let listing =
            Listing::assemble::<House, Rental>(house_rental()).unwrap();

        assert_eq!(listing.kind(), CompositeKind::HouseRental);
        assert_eq!(listing.physical_kind(), PhysicalKind::House);
        assert_eq!(listing.transaction_kind(), TransactionKind::Rental);
        assert_eq!(listing.property.square_feet, "1800");

        let house = listing.house().unwrap();
        assert_eq!(house.garage, Some(Garage::Detached));
        assert_eq!(house.fenced, Some(YesNo::Yes));
        assert_eq!(house.num_stories, "2");

        let rental = listing.rental().unwrap();
        assert_eq!(rental.rent, "1200");
        assert_eq!(rental.furnished, Some(YesNo::No));

        assert!(listing.apartment().is_none());
        assert!(listing.purchase().is_none());
    }

    #[test]
    fn reads_back_assembled_fields() {
        let collected = house_rental();
        let listing =
            Listing::assemble::<House, Rental>(collected.clone()).unwrap();

        assert_eq!(listing.fields(), collected);
    }

    #[test]
    fn leaves_missing_fields_uncollected() {
        let listing = Listing::assemble::<Apartment, Purchase>(fields(&[
            ("laundry", "coin"),
            ("price", "100000"),
        ]))
        .unwrap();

        assert_eq!(listing.property, Property::default());
        assert_eq!(
            listing.apartment(),
            Some(&Apartment {
                laundry: Some(Laundry::Coin),
                balcony: None,
            }),
        );

        let read = listing.fields();
        assert_eq!(read.len(), 7);
        assert_eq!(read["balcony"], "");
        assert_eq!(read["taxes"], "");
    }

    #[test]
    fn normalizes_enumerated_fields() {
        let listing = Listing::assemble::<Apartment, Rental>(fields(&[
            ("balcony", "Solarium"),
            ("furnished", " YES "),
        ]))
        .unwrap();

        assert_eq!(
            listing.apartment().unwrap().balcony,
            Some(Balcony::Solarium),
        );
        assert_eq!(listing.rental().unwrap().furnished, Some(YesNo::Yes));
    }

    #[test]
    fn copies_apartment_extension() {
        let listing = Listing::assemble::<Apartment, Purchase>(fields(&[
            ("laundry", "coin"),
        ]))
        .unwrap();

        let apartment = *listing.apartment().unwrap();

        assert_eq!(apartment.laundry, Some(Laundry::Coin));
        assert_eq!(apartment.balcony, None);
        assert_eq!(listing.apartment(), Some(&apartment));
    }

    #[test]
    fn rejects_invalid_tokens() {
        assert_eq!(
            Listing::assemble::<House, Purchase>(fields(&[(
                "garage", "carport"
            )])),
            Err(FieldError::InvalidToken {
                field: "garage",
                value: "carport".to_owned(),
            }),
        );
    }

    #[test]
    fn rejects_fields_of_other_sections() {
        assert_eq!(
            Listing::assemble::<House, Purchase>(fields(&[("rent", "900")])),
            Err(FieldError::UnexpectedField("rent".to_owned())),
        );
        assert_eq!(
            Listing::assemble::<Apartment, Rental>(fields(&[(
                "garage", "none"
            )])),
            Err(FieldError::UnexpectedField("garage".to_owned())),
        );
    }

    #[test]
    fn composite_kind_tags() {
        use CompositeKind as K;

        for (kind, physical, transaction) in [
            (K::HousePurchase, PhysicalKind::House, TransactionKind::Purchase),
            (K::HouseRental, PhysicalKind::House, TransactionKind::Rental),
            (
                K::ApartmentPurchase,
                PhysicalKind::Apartment,
                TransactionKind::Purchase,
            ),
            (
                K::ApartmentRental,
                PhysicalKind::Apartment,
                TransactionKind::Rental,
            ),
        ] {
            assert_eq!(kind.physical(), physical);
            assert_eq!(kind.transaction(), transaction);
            assert_eq!(K::of(physical, transaction), kind);
        }
        assert_eq!(K::ApartmentRental.title(), "APARTMENT RENTAL");
        assert_eq!(K::TOKENS.len(), 4);
    }

    #[test]
    fn renders_rental_with_base_section() {
        let listing =
            Listing::assemble::<House, Rental>(house_rental()).unwrap();

        assert_eq!(
            listing.to_string(),
            "HOUSE RENTAL\n\
             PROPERTY DETAILS\n\
             ================\n\
             square footage: 1800\n\
             bedrooms: 3\n\
             bathrooms: 2\n\
             \n\
             HOUSE DETAILS\n\
             # of stories: 2\n\
             garage: detached\n\
             fenced yard: yes\n\
             RENTAL DETAILS\n\
             rent: 1200\n\
             estimated utilities: 150\n\
             furnished: no\n",
        );
    }

    #[test]
    fn renders_apartment_purchase() {
        let listing = Listing::assemble::<Apartment, Purchase>(fields(&[
            ("square_feet", "640"),
            ("beds", "1"),
            ("baths", "1"),
            ("laundry", "ensuite"),
            ("balcony", "no"),
            ("price", "250000"),
            ("taxes", "3000"),
        ]))
        .unwrap();

        assert_eq!(
            listing.to_string(),
            "APARTMENT PURCHASE\n\
             PROPERTY DETAILS\n\
             ================\n\
             square footage: 640\n\
             bedrooms: 1\n\
             bathrooms: 1\n\
             \n\
             APARTMENT DETAILS\n\
             laundry: ensuite\n\
             has balcony: no\n\
             PURCHASE DETAILS\n\
             selling price: 250000\n\
             estimated taxes: 3000\n",
        );
    }
}
