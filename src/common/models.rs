use serde::Deserialize;

/// Indirizzo restituito da ViaCEP. Tutti i campi sono stringhe opache e
/// vengono conservati così come arrivano dal servizio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub unidade: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
    pub estado: String,
    pub regiao: String,
    pub ibge: String,
    pub gia: String,
    pub ddd: String,
    pub siafi: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Address),
    /// The service answered but flagged the code with `"erro": true`.
    NotFound,
}

/// The nine fields shown on the form, in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Street,
    Neighborhood,
    City,
    StateName,
    StateAbbreviation,
    Region,
    AreaCode,
    TaxCode,
    MunicipalityCode,
}

const ALL_FIELDS: [AddressField; 9] = [
    AddressField::Street,
    AddressField::Neighborhood,
    AddressField::City,
    AddressField::StateName,
    AddressField::StateAbbreviation,
    AddressField::Region,
    AddressField::AreaCode,
    AddressField::TaxCode,
    AddressField::MunicipalityCode,
];

impl AddressField {
    pub fn all() -> &'static [AddressField] {
        &ALL_FIELDS
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressField::Street => "Logradouro",
            AddressField::Neighborhood => "Bairro",
            AddressField::City => "Cidade",
            AddressField::StateName => "Estado",
            AddressField::StateAbbreviation => "UF",
            AddressField::Region => "Região",
            AddressField::AreaCode => "DDD",
            AddressField::TaxCode => "GIA",
            AddressField::MunicipalityCode => "IBGE",
        }
    }

    pub fn value<'a>(&self, address: &'a Address) -> &'a str {
        match self {
            AddressField::Street => &address.logradouro,
            AddressField::Neighborhood => &address.bairro,
            AddressField::City => &address.localidade,
            AddressField::StateName => &address.estado,
            AddressField::StateAbbreviation => &address.uf,
            AddressField::Region => &address.regiao,
            AddressField::AreaCode => &address.ddd,
            AddressField::TaxCode => &address.gia,
            AddressField::MunicipalityCode => &address.ibge,
        }
    }

    /// Value of this field for an optional address, as the renderer wants it.
    pub fn text<'a>(&self, address: Option<&'a Address>) -> Option<&'a str> {
        address.map(|a| self.value(a))
    }
}

impl std::fmt::Display for AddressField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
