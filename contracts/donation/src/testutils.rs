//! Shared setup for the donation contract tests.

use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env, String};

use crate::{DonationContract, DonationContractClient, DonorInfo};

pub const ELECTION: &str = "2026-general";

#[allow(dead_code)]
pub struct TestSetup<'a> {
    pub env: Env,
    pub client: DonationContractClient<'a>,
    pub contract_id: Address,
    pub admin: Address,
    pub token: Address,
    pub treasury: Address,
}

/// Register a token and an initialized donation contract with defaults.
pub fn setup() -> TestSetup<'static> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token = token_contract.address();

    let contract_id = env.register(DonationContract, ());
    let client = DonationContractClient::new(&env, &contract_id);
    client.initialize(&admin, &token, &treasury);

    TestSetup {
        env,
        client,
        contract_id,
        admin,
        token,
        treasury,
    }
}

impl TestSetup<'_> {
    /// A donor holding `amount` tokens.
    pub fn funded_donor(&self, amount: i128) -> Address {
        let donor = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.token).mint(&donor, &amount);
        donor
    }

    pub fn balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.token).balance(who)
    }

    /// Let the contract pull up to `amount` from `donor`.
    pub fn approve(&self, donor: &Address, amount: i128) {
        let expiration = self.env.ledger().sequence() + 10_000;
        TokenClient::new(&self.env, &self.token).approve(donor, &self.contract_id, &amount, &expiration);
    }

    pub fn election(&self) -> String {
        String::from_str(&self.env, ELECTION)
    }
}

pub fn donor_info(env: &Env) -> DonorInfo {
    DonorInfo {
        first_name: String::from_str(env, "Jane"),
        last_name: String::from_str(env, "Doe"),
        email: String::from_str(env, "jane.doe@example.com"),
        phone: String::from_str(env, "(555) 123-4567"),
        street: String::from_str(env, "100 Main St"),
        city: String::from_str(env, "Springfield"),
        state: String::from_str(env, "IL"),
        zip: String::from_str(env, "62701"),
        occupation: String::from_str(env, "Teacher"),
        employer: String::from_str(env, "Springfield Schools"),
        comment: String::from_str(env, ""),
    }
}
