//! Built-in definition of the Eleutheria 2025 registration form.
//!
//! Entry names and option values belong to the external Google Form and
//! must match it exactly.

use crate::core::age_gate::MINIMUM_AGE;
use crate::domain::model::{EventDetail, EventDetails, FieldConfig, FieldVariant, NormalizerKind};

pub const DEFAULT_ENDPOINT: &str = "https://docs.google.com/forms/u/0/d/e/1FAIpQLSde4P_3rOrXZembrQToUQKjCPJH8TDyGiC6sI1U9ln8A_pYug/formResponse";

pub const DEFAULT_MIN_AGE: u32 = MINIMUM_AGE;

const PHONE_PATTERN: &str = "^[-() 0-9]+$";
const PHONE_PLACEHOLDER: &str = "Ex: (19) 99999-9999";

const RETREATANT: &str = "Dados do Retirante";
const ADDRESS: &str = "Endereço Completo";
const COMPLEMENTARY: &str = "Dados Complementares";
const EMERGENCY: &str = "Em caso de emergência";
const IMAGE_USE: &str = "Uso de imagem";

pub fn default_event() -> EventDetails {
    let detail = |label: &str, value: &str| EventDetail {
        label: label.to_string(),
        value: value.to_string(),
    };

    EventDetails {
        title: "ELEUTHERIA 2025".to_string(),
        motto: Some("“Eis a vontade de Deus: A vossa Santificação”".to_string()),
        motto_reference: Some("I Tessalonicenses 4, 3".to_string()),
        details: vec![
            detail("Data", "20, 21 e 22 de Junho/2025"),
            detail("Música Tema", "Eis-me aqui – Colo de Deus"),
            detail("Local", "Centro de Formação Religioso – Luiza G. Freguglia"),
            detail("Cidade", "Santa Bárbara d’Oeste"),
            detail("Saída", "20/06/2025 às 19h00 - Paróquia Santa Luzia"),
            detail("Retorno", "22/06/2025 às 17h30, saída de Santa Bárbara d’Oeste"),
            detail("Faixa etária", "14 a 30 anos"),
            detail("Valor", "1º Lote até 15/05, R$ 100"),
        ],
    }
}

pub fn default_fields() -> Vec<FieldConfig> {
    use FieldVariant::*;

    vec![
        FieldConfig::new(
            "nome_completo",
            "entry.1625406627",
            "Deus te chama pelo nome, qual é o seu? (Nome completo):",
            Text,
        )
        .in_section(RETREATANT),
        FieldConfig::new("rg", "entry.1190390295", "RG:", Text)
            .in_section(RETREATANT)
            .numeric_keyboard()
            .with_pattern("[0-9.-]*")
            .with_placeholder("Ex: 12345678-9"),
        FieldConfig::new("data_nascimento", "entry.262154056", "Data de Nascimento:", Date)
            .in_section(RETREATANT)
            .gated_by_age(),
        FieldConfig::new("sexo", "entry.875875820", "Sexo:", Radio)
            .in_section(RETREATANT)
            .with_plain_options(&["Masculino", "Feminino"]),
        FieldConfig::new("whatsapp", "entry.1814162605", "WhatsApp:", Text)
            .in_section(RETREATANT)
            .numeric_keyboard()
            .with_pattern(PHONE_PATTERN)
            .with_placeholder(PHONE_PLACEHOLDER)
            .with_normalizer(NormalizerKind::Phone),
        FieldConfig::new("estado_civil", "entry.325339926", "Estado Civil:", Select)
            .in_section(RETREATANT)
            .with_plain_options(&["Solteiro", "Casado", "Divorciado", "Viuvo", "Amasiado"]),
        FieldConfig::new("rua", "entry.604883494", "Rua", Text)
            .in_section(ADDRESS)
            .with_placeholder("Ex: Rua das Flores"),
        FieldConfig::new("numero", "entry.696160417", "Número", Number)
            .in_section(ADDRESS)
            .with_min(1)
            .with_placeholder("Ex: 123"),
        FieldConfig::new("complemento", "entry.360566182", "Complemento", Text)
            .in_section(ADDRESS)
            .optional()
            .with_placeholder("Ex: Apt 45, Bloco B"),
        FieldConfig::new("bairro", "entry.1363635295", "Bairro", Text)
            .in_section(ADDRESS)
            .with_placeholder("Ex: Centro"),
        FieldConfig::new("cidade", "entry.2084384625", "Cidade", Text)
            .in_section(ADDRESS)
            .with_placeholder("Ex: Hortolândia"),
        FieldConfig::new("estado", "entry.833735459", "Estado", Select)
            .in_section(ADDRESS)
            .with_options(&[("SP", "São Paulo"), ("RJ", "Rio de Janeiro")]),
        FieldConfig::new("cep", "entry.513467057", "CEP", Text)
            .in_section(ADDRESS)
            .numeric_keyboard()
            .with_pattern("[0-9]{5}-?[0-9]{3}")
            .with_placeholder("Ex: 12345-678")
            .with_normalizer(NormalizerKind::PostalCode),
        FieldConfig::new("religiao", "entry.21587281", "Religião (se tiver): ", Text)
            .in_section(COMPLEMENTARY),
        FieldConfig::new("sacramentos", "entry.1069811539", "Quais Sacramentos possui?:", Checkbox)
            .in_section(COMPLEMENTARY)
            .with_plain_options(&["Batismo", "1° Eucaristia", "Crisma", "Matrimônio", "Nenhum"]),
        FieldConfig::new("paroquia", "entry.1843148734", "Paróquia/Comunidade:", Text)
            .in_section(COMPLEMENTARY),
        FieldConfig::new("doenca_cronica", "entry.349133218", "Possui alguma doença crônica?", Textarea)
            .in_section(COMPLEMENTARY)
            .with_rows(4),
        FieldConfig::new("alergia", "entry.1845817507", "Possui alguma alergia?", Textarea)
            .in_section(COMPLEMENTARY)
            .with_rows(4),
        FieldConfig::new(
            "medicamento_controlado",
            "entry.1319146195",
            "Faz uso de medicamento controlado?",
            Textarea,
        )
        .in_section(COMPLEMENTARY)
        .with_rows(4),
        FieldConfig::new("analgesico", "entry.88277559", "Pode tomar analgésico?", Radio)
            .in_section(COMPLEMENTARY)
            .with_options(&[("Sim", "Sim"), ("Nao", "Não")]),
        FieldConfig::new("outras_restricoes", "entry.1924903226", "Outras restrições:", Textarea)
            .in_section(COMPLEMENTARY)
            .with_rows(4),
        FieldConfig::new("como_conheceu", "entry.1333170998", "Como conheceu o Eleutheria?", Select)
            .in_section(COMPLEMENTARY)
            .with_plain_options(&[
                "Instagram",
                "Convite de Amigos",
                "Convite dos Pais",
                "Aviso na Missa",
                "Outro",
            ]),
        FieldConfig::new("contato_emergencia", "entry.1985798356", "Contato de emergência:", Text)
            .in_section(EMERGENCY)
            .numeric_keyboard()
            .with_pattern(PHONE_PATTERN)
            .with_placeholder(PHONE_PLACEHOLDER)
            .with_normalizer(NormalizerKind::Phone),
        FieldConfig::new(
            "nome_emergencia",
            "entry.1574448511",
            "Nome do contato de emergência?",
            Text,
        )
        .in_section(EMERGENCY),
        FieldConfig::new("uso_imagem", "entry.667484391", "Autoriza o uso de imagem?", Radio)
            .in_section(IMAGE_USE)
            .with_plain_options(&[
                "Sim, a comunicação pode tirar fotos e vídeos meus e publicar nas mídias sociais.",
                "Não desejo que minha imagem seja registrada nas mídias sociais.",
            ]),
    ]
}
